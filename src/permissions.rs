use uuid::Uuid;

use crate::models::course::Course;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action{
    Read,
    Write,
}

/// Owner-or-read-only: any authenticated user may read a course, only the
/// owning teacher may write to it.
pub fn allows(user_id: Uuid, course: &Course, action: Action) -> bool{
    match action {
        Action::Read => true,
        Action::Write => course.teacher_id == user_id,
    }
}
