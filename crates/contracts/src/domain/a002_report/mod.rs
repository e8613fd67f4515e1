pub mod aggregate;
pub mod catalog;
pub mod findings;

pub use aggregate::{
    CriminalStatus, EducationStatus, EmploymentStatus, IdentityStatus, ReportData, ScreeningStatus,
};
pub use catalog::{get_report_data, has_report};
pub use findings::{category_detail, CategoryDetail, FindingRow, FindingSection};
