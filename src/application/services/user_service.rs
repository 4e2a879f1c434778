use crate::application::client::Client;
use crate::application::interfaces::UserService;
use crate::error::AppError;
use crate::model::responses::{Project, Tag, Task, TimeEntry, User, Workspace, WorkspaceClient};
use crate::model::utils::decode;
use async_trait::async_trait;
use std::borrow::Cow;

impl Client {
    async fn related_data<'a>(&self, user: Option<&'a User>) -> Result<Cow<'a, User>, AppError> {
        match user {
            Some(user) => Ok(Cow::Borrowed(user)),
            None => Ok(Cow::Owned(self.me(true).await?)),
        }
    }
}

#[async_trait]
impl UserService for Client {
    async fn me(&self, with_related_data: bool) -> Result<User, AppError> {
        let query: &[(&str, &str)] = if with_related_data {
            &[("with_related_data", "true")]
        } else {
            &[]
        };
        decode(self.connection().get("me", query).await?)
    }

    async fn my_clients(&self, user: Option<&User>) -> Result<Vec<WorkspaceClient>, AppError> {
        Ok(self.related_data(user).await?.clients.clone().unwrap_or_default())
    }

    async fn my_projects(&self, user: Option<&User>) -> Result<Vec<Project>, AppError> {
        let user = self.related_data(user).await?;
        Ok(user
            .projects
            .iter()
            .flatten()
            .filter(|p| p.server_deleted_at.is_none())
            .cloned()
            .collect())
    }

    async fn my_deleted_projects(&self, user: Option<&User>) -> Result<Vec<Project>, AppError> {
        let user = self.related_data(user).await?;
        Ok(user
            .projects
            .iter()
            .flatten()
            .filter(|p| p.server_deleted_at.is_some())
            .cloned()
            .collect())
    }

    async fn my_tags(&self, user: Option<&User>) -> Result<Vec<Tag>, AppError> {
        Ok(self.related_data(user).await?.tags.clone().unwrap_or_default())
    }

    async fn my_tasks(&self, user: Option<&User>) -> Result<Vec<Task>, AppError> {
        Ok(self.related_data(user).await?.tasks.clone().unwrap_or_default())
    }

    async fn my_time_entries(&self, user: Option<&User>) -> Result<Vec<TimeEntry>, AppError> {
        Ok(self
            .related_data(user)
            .await?
            .time_entries
            .clone()
            .unwrap_or_default())
    }

    async fn my_workspaces(&self, user: Option<&User>) -> Result<Vec<Workspace>, AppError> {
        Ok(self
            .related_data(user)
            .await?
            .workspaces
            .clone()
            .unwrap_or_default())
    }
}
