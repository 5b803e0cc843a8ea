mod employees;
mod login;
mod maintenance;
mod receipt_viewer;
mod receipts;

pub use employees::EmployeesPage;
pub use login::LoginPage;
pub use maintenance::MaintenancePage;
pub use receipt_viewer::ReceiptViewer;
pub use receipts::ReceiptsPage;
