mod form;
mod list;

pub use form::DonneeForm;
pub use list::DonneesPage;
