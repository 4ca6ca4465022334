use taskdeck_shared::TaskCreate;

pub const TASK_REQUIRED_FIELDS_MESSAGE:
  &str = "Title and Due Date are required.";

/// Raw contents of the add-task form.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Default,
)]
pub struct TaskDraft {
  pub title:          String,
  pub description:    String,
  pub due_date:       String,
  pub category:       String,
  pub estimated_time: String
}

impl TaskDraft {
  /// Trims every field and checks the
  /// required ones. On error the message
  /// is ready for inline display.
  pub fn validate(
    &self
  ) -> Result<TaskCreate, &'static str> {
    let title = self.title.trim();
    let due_date = self.due_date.trim();
    if title.is_empty()
      || due_date.is_empty()
    {
      return Err(
        TASK_REQUIRED_FIELDS_MESSAGE
      );
    }

    let estimate =
      self.estimated_time.trim();
    Ok(TaskCreate {
      title:          title.to_string(),
      description:    self
        .description
        .trim()
        .to_string(),
      due_date:       due_date
        .to_string(),
      category:       self
        .category
        .trim()
        .to_string(),
      estimated_time: (!estimate
        .is_empty())
      .then(|| estimate.to_string())
    })
  }
}
