use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::models::course::{Course, CourseUpdate, NewCourse};
use crate::models::user::{AuthToken, NewUser, User};

use super::{Repository, StoreError};

pub struct PgRepository{
    pool: Pool<Postgres>,
}

impl PgRepository{
    pub fn new(pool: Pool<Postgres>) -> Self{
        PgRepository{pool}
    }
}

#[async_trait]
impl Repository for PgRepository {
    async fn list_courses(&self) -> Result<Vec<Course>, StoreError>{
        let courses = sqlx::query_as::<_, Course>(
            r#"
                SELECT id, name, introduction, teacher_id, price FROM course_table
                ORDER BY id
            "#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(courses)
    }

    async fn get_course(&self, id: Uuid) -> Result<Option<Course>, StoreError>{
        let course = sqlx::query_as::<_, Course>(
            r#"
                SELECT id, name, introduction, teacher_id, price FROM course_table
                WHERE id = $1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(course)
    }

    async fn insert_course(&self, new: NewCourse) -> Result<Course, StoreError>{
        let course = sqlx::query_as::<_, Course>(
            r#"
                INSERT INTO course_table (id, name, introduction, teacher_id, price)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, name, introduction, teacher_id, price
            "#
        )
        .bind(Uuid::new_v4())
        .bind(&new.name)
        .bind(&new.introduction)
        .bind(new.teacher_id)
        .bind(new.price)
        .fetch_one(&self.pool)
        .await?;

        Ok(course)
    }

    async fn update_course(&self, id: Uuid, update: CourseUpdate) -> Result<Option<Course>, StoreError>{
        let course = sqlx::query_as::<_, Course>(
            r#"
                UPDATE course_table
                SET name = $2, introduction = $3, price = $4
                WHERE id = $1
                RETURNING id, name, introduction, teacher_id, price
            "#
        )
        .bind(id)
        .bind(&update.name)
        .bind(&update.introduction)
        .bind(update.price)
        .fetch_optional(&self.pool)
        .await?;

        Ok(course)
    }

    async fn delete_course(&self, id: Uuid) -> Result<bool, StoreError>{
        let result = sqlx::query(
            r#"
                DELETE FROM course_table
                WHERE id = $1
            "#
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn create_user(&self, new: NewUser) -> Result<User, StoreError>{
        let user = sqlx::query_as::<_, User>(
            r#"
                INSERT INTO user_table (id, name, email, password)
                VALUES ($1, $2, $3, $4)
                RETURNING id, name, email, password
            "#
        )
        .bind(Uuid::new_v4())
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.password)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>{
        let user = sqlx::query_as::<_, User>(
            r#"
                SELECT id, name, email, password FROM user_table
                WHERE email = $1
            "#
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn insert_token(&self, token: AuthToken) -> Result<(), StoreError>{
        sqlx::query(
            r#"
                INSERT INTO token_table (key, user_id, created)
                VALUES ($1, $2, $3)
            "#
        )
        .bind(&token.key)
        .bind(token.user_id)
        .bind(token.created)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_user_by_token(&self, key: &str) -> Result<Option<User>, StoreError>{
        let user = sqlx::query_as::<_, User>(
            r#"
                SELECT u.id, u.name, u.email, u.password
                FROM token_table t
                JOIN user_table u ON u.id = t.user_id
                WHERE t.key = $1
            "#
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_token_for_user(&self, user_id: Uuid) -> Result<Option<AuthToken>, StoreError>{
        let token = sqlx::query_as::<_, AuthToken>(
            r#"
                SELECT key, user_id, created FROM token_table
                WHERE user_id = $1
            "#
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(token)
    }
}
