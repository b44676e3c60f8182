use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct Course{
    pub id: Uuid,
    pub name: String,
    pub introduction: Option<String>,
    pub teacher_id: Uuid,
    pub price: Decimal,
}

pub struct NewCourse{
    pub name: String,
    pub introduction: Option<String>,
    pub price: Decimal,
    pub teacher_id: Uuid,
}

/// Full-replacement update set. The teacher is fixed at creation and is
/// deliberately absent here.
pub struct CourseUpdate{
    pub name: String,
    pub introduction: Option<String>,
    pub price: Decimal,
}
