//! Data models for `gradepoint`

pub mod course;
pub mod result;
pub mod scale;
pub mod settings;

pub use course::{CourseRecord, CourseType, CreditSystem};
pub use result::{
    CalculationResult, CourseDetail, GpaBreakdown, SimpleCalculation, SimpleCourseDetail,
};
pub use scale::{GradingScale, ScaleType};
pub use settings::InstitutionalSettings;
