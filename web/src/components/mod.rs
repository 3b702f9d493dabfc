pub mod booking_calendar;
pub mod carousel;
pub mod contact_modal;
pub mod document_input;
pub mod error;
pub mod loading;
pub mod newsletter_form;
pub mod success_notification;
pub mod time_slot_picker;
pub mod toast;
pub mod wizard_progress;

pub use booking_calendar::BookingCalendar;
pub use carousel::Carousel;
pub use contact_modal::ContactModal;
pub use document_input::DocumentInput;
pub use error::ErrorView;
pub use loading::LoadingView;
pub use newsletter_form::NewsletterForm;
pub use success_notification::SuccessNotification;
pub use time_slot_picker::TimeSlotPicker;
pub use toast::Toast;
pub use wizard_progress::WizardProgress;
