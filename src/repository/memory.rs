use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::course::{Course, CourseUpdate, NewCourse};
use crate::models::user::{AuthToken, NewUser, User};

use super::{Repository, StoreError};

/// HashMap-backed store so handler tests run without a live Postgres.
#[derive(Default)]
pub struct MemRepository{
    courses: Mutex<HashMap<Uuid, Course>>,
    users: Mutex<HashMap<Uuid, User>>,
    tokens: Mutex<HashMap<String, AuthToken>>,
}

#[async_trait]
impl Repository for MemRepository {
    async fn list_courses(&self) -> Result<Vec<Course>, StoreError>{
        let mut courses: Vec<Course> = self.courses.lock().unwrap().values().cloned().collect();
        courses.sort_by_key(|course| course.id);
        Ok(courses)
    }

    async fn get_course(&self, id: Uuid) -> Result<Option<Course>, StoreError>{
        Ok(self.courses.lock().unwrap().get(&id).cloned())
    }

    async fn insert_course(&self, new: NewCourse) -> Result<Course, StoreError>{
        let course = Course{
            id: Uuid::new_v4(),
            name: new.name,
            introduction: new.introduction,
            teacher_id: new.teacher_id,
            price: new.price,
        };
        self.courses.lock().unwrap().insert(course.id, course.clone());
        Ok(course)
    }

    async fn update_course(&self, id: Uuid, update: CourseUpdate) -> Result<Option<Course>, StoreError>{
        let mut courses = self.courses.lock().unwrap();
        let Some(course) = courses.get_mut(&id) else {
            return Ok(None);
        };
        course.name = update.name;
        course.introduction = update.introduction;
        course.price = update.price;
        Ok(Some(course.clone()))
    }

    async fn delete_course(&self, id: Uuid) -> Result<bool, StoreError>{
        Ok(self.courses.lock().unwrap().remove(&id).is_some())
    }

    async fn create_user(&self, new: NewUser) -> Result<User, StoreError>{
        let user = User{
            id: Uuid::new_v4(),
            name: new.name,
            email: new.email,
            password: new.password,
        };
        self.users.lock().unwrap().insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>{
        let users = self.users.lock().unwrap();
        Ok(users.values().find(|user| user.email == email).cloned())
    }

    async fn insert_token(&self, token: AuthToken) -> Result<(), StoreError>{
        self.tokens.lock().unwrap().insert(token.key.clone(), token);
        Ok(())
    }

    async fn find_user_by_token(&self, key: &str) -> Result<Option<User>, StoreError>{
        let user_id = match self.tokens.lock().unwrap().get(key) {
            Some(token) => token.user_id,
            None => return Ok(None),
        };
        Ok(self.users.lock().unwrap().get(&user_id).cloned())
    }

    async fn find_token_for_user(&self, user_id: Uuid) -> Result<Option<AuthToken>, StoreError>{
        let tokens = self.tokens.lock().unwrap();
        Ok(tokens.values().find(|token| token.user_id == user_id).cloned())
    }
}
