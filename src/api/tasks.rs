use super::client::{decode, ApiClient};
use super::transport::{ApiRequest, Method, Transport};
use crate::error::FlowError;
use crate::models::{Ack, NewTask, Task, TaskStatus, TaskUpdate};

impl<T: Transport> ApiClient<T> {
    /// `GET /tasks`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the list cannot be decoded.
    pub fn list_tasks(&self) -> Result<Vec<Task>, FlowError> {
        self.get("/tasks")
    }

    /// `POST /tasks`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn create_task(&self, task: &NewTask) -> Result<Task, FlowError> {
        self.post("/tasks", task)
    }

    /// `PUT /tasks/{id}` with only the changed fields.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::InvalidArgument` for an empty update, otherwise
    /// whatever the request fails with.
    pub fn update_task(&self, id: &str, update: &TaskUpdate) -> Result<Task, FlowError> {
        if update.is_empty() {
            return Err(FlowError::InvalidArgument("Nothing to update".to_string()));
        }
        self.put(&format!("/tasks/{id}"), update)
    }

    /// `DELETE /tasks/{id}`
    ///
    /// # Errors
    ///
    /// Returns `FlowError::NotFound` if the task does not exist.
    pub fn delete_task(&self, id: &str) -> Result<Ack, FlowError> {
        self.delete(&format!("/tasks/{id}"))
    }

    /// `PATCH /tasks/{id}/status?status=`
    ///
    /// # Errors
    ///
    /// Returns `FlowError::NotFound` if the task does not exist.
    pub fn update_task_status(&self, id: &str, status: TaskStatus) -> Result<Task, FlowError> {
        let request = ApiRequest::new(Method::Patch, format!("/tasks/{id}/status"))
            .query("status", status.as_str());
        decode(&self.send_authorized(request)?)
    }

    /// Flip a task between done and not done, as the list checkbox does.
    ///
    /// # Errors
    ///
    /// Returns an error if the status update fails.
    pub fn toggle_task(&self, task: &Task) -> Result<Task, FlowError> {
        self.update_task_status(&task.id, task.status.toggled())
    }
}
