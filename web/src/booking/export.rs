use async_trait::async_trait;
use shared_types::SlipFields;

use super::draft::BookingDraft;
use super::error::BookingError;
use super::summary::{center_display, short_date};

const NOT_SELECTED: &str = "Not selected";

/// Renders the appointment slip and hands it to the user.
#[async_trait(?Send)]
pub trait DocumentExport {
    async fn render_and_download(&self, fields: &SlipFields) -> Result<(), BookingError>;
}

pub fn slip_fields(draft: &BookingDraft) -> SlipFields {
    SlipFields {
        tracking_number: draft.tracking_number().unwrap_or_default().to_string(),
        name: draft.applicant.full_name(),
        email: draft.applicant.email.clone(),
        phone: draft.applicant.phone.clone(),
        service: draft
            .service
            .as_ref()
            .map(|s| s.name.clone())
            .unwrap_or_default(),
        date: draft
            .date
            .map(short_date)
            .unwrap_or_else(|| NOT_SELECTED.to_string()),
        time: draft.time.clone().unwrap_or_else(|| NOT_SELECTED.to_string()),
        center: center_display(draft),
    }
}

/// One A4 page: header, tracking number, the detail table and a footer note.
#[cfg(feature = "ssr")]
pub fn render_slip_pdf(fields: &SlipFields) -> Result<Vec<u8>, BookingError> {
    use printpdf::{BuiltinFont, Color, Mm, PdfDocument, Rgb};

    // printpdf measures y from the bottom edge.
    const PAGE_HEIGHT: f32 = 297.0;
    let from_top = |y: f32| Mm(PAGE_HEIGHT - y);
    let export_err = |e: printpdf::Error| BookingError::Export(e.to_string());

    let (doc, page, layer) = PdfDocument::new(
        format!("Appointment slip {}", fields.tracking_number),
        Mm(210.0),
        Mm(PAGE_HEIGHT),
        "Slip",
    );
    let layer = doc.get_page(page).get_layer(layer);
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(export_err)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(export_err)?;

    layer.set_fill_color(Color::Rgb(Rgb::new(0.23, 0.51, 0.96, None)));
    layer.use_text("Government Services", 20.0, Mm(68.0), from_top(20.0), &bold);
    layer.use_text("Appointment Confirmation", 16.0, Mm(66.0), from_top(30.0), &regular);

    layer.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
    layer.use_text("Tracking #:", 12.0, Mm(20.0), from_top(60.0), &bold);
    layer.use_text(fields.tracking_number.clone(), 12.0, Mm(50.0), from_top(60.0), &regular);

    let rows = [
        ("Name:", &fields.name),
        ("Email:", &fields.email),
        ("Phone:", &fields.phone),
        ("Service:", &fields.service),
        ("Appointment Date:", &fields.date),
        ("Time Slot:", &fields.time),
        ("Center:", &fields.center),
    ];
    for (i, (label, value)) in rows.iter().enumerate() {
        let y = from_top(80.0 + 10.0 * i as f32);
        layer.use_text(*label, 12.0, Mm(20.0), y, &bold);
        layer.use_text(value.as_str(), 12.0, Mm(60.0), y, &regular);
    }

    layer.set_fill_color(Color::Rgb(Rgb::new(0.39, 0.39, 0.39, None)));
    layer.use_text(
        "Please bring this slip and required documents to your appointment",
        10.0,
        Mm(40.0),
        from_top(250.0),
        &regular,
    );
    layer.use_text(
        "Thank you for using our services",
        10.0,
        Mm(77.0),
        from_top(260.0),
        &regular,
    );

    doc.save_to_bytes().map_err(export_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::catalog::find_service;
    use crate::booking::draft::{ApplicantField, DraftAction};
    use chrono::NaiveDate;

    #[test]
    fn slip_uses_short_date_and_center_label() {
        let mut draft = BookingDraft::new();
        draft.apply(DraftAction::SelectService(find_service(6)));
        draft.apply(DraftAction::SelectCenter(Some("21".to_string())));
        draft.apply(DraftAction::SelectDate(
            NaiveDate::from_ymd_opt(2026, 11, 3).unwrap(),
        ));
        draft.apply(DraftAction::SetApplicant(ApplicantField::FirstName, "Ada".to_string()));
        draft.apply(DraftAction::SetApplicant(ApplicantField::LastName, "Lovelace".to_string()));
        let tracking = draft.ensure_tracking_number().to_string();

        let fields = slip_fields(&draft);
        assert_eq!(fields.tracking_number, tracking);
        assert_eq!(fields.name, "Ada Lovelace");
        assert_eq!(fields.service, "USA Visa");
        assert_eq!(fields.date, "11/3/2026");
        assert_eq!(fields.time, "Not selected");
        assert_eq!(fields.center, "New York, US");
        assert_eq!(fields.file_name(), format!("appointment_slip_{tracking}.pdf"));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn renders_a_pdf_document() {
        let fields = SlipFields {
            tracking_number: "REF-424242".to_string(),
            name: "Ada Lovelace".to_string(),
            ..Default::default()
        };
        let bytes = render_slip_pdf(&fields).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
