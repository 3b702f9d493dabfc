use shared_types::ServiceOption;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogService {
    pub id: u32,
    pub name: &'static str,
    pub sort_code: &'static str,
}

impl CatalogService {
    pub fn option(&self) -> ServiceOption {
        ServiceOption {
            id: self.id,
            name: self.name.to_string(),
            sort_code: self.sort_code.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Center {
    pub id: &'static str,
    pub label: &'static str,
}

pub const SERVICES: [CatalogService; 5] = [
    CatalogService { id: 1, name: "Nigeria Visa", sort_code: "NVS" },
    CatalogService { id: 2, name: "BVN Enrolment", sort_code: "BVN" },
    CatalogService { id: 3, name: "Passport Services", sort_code: "PPT" },
    CatalogService { id: 5, name: "NIN Enrollment", sort_code: "NIN" },
    CatalogService { id: 6, name: "USA Visa", sort_code: "USV" },
];

pub const CENTERS: [Center; 7] = [
    Center { id: "1", label: "London, UK" },
    Center { id: "20", label: "Los Angeles, US" },
    Center { id: "7", label: "Manchester, UK" },
    Center { id: "21", label: "New York, US" },
    Center { id: "8", label: "Paris, France" },
    Center { id: "26", label: "The Hague, Netherlands" },
    Center { id: "17", label: "Washington DC, USA" },
];

/// (value, label)
pub const VISA_TYPES: [(&str, &str); 4] = [
    ("tourist", "Tourist Visa"),
    ("work", "Work Visa"),
    ("student", "Student Visa"),
    ("transit", "Transit Visa"),
];

pub fn find_service(id: u32) -> Option<ServiceOption> {
    SERVICES.iter().find(|s| s.id == id).map(CatalogService::option)
}

pub fn center_label(id: &str) -> Option<&'static str> {
    CENTERS.iter().find(|c| c.id == id).map(|c| c.label)
}
