// cafe-storefront/src/screens/admin/form_state.rs

use cafe_core::FormMode;

/// The add/edit form next to an admin table.
///
/// `editing` holds the id of the row being edited; `None` means the form
/// creates a new row.
#[derive(Debug, Clone)]
pub struct FormState<D, Id> {
  pub draft: D,
  pub editing: Option<Id>,
  pub submitting: bool,
}

impl<D: Default, Id> Default for FormState<D, Id> {
  fn default() -> Self {
    Self {
      draft: D::default(),
      editing: None,
      submitting: false,
    }
  }
}

impl<D: Default, Id> FormState<D, Id> {
  pub fn begin_edit(&mut self, id: Id, draft: D) {
    self.editing = Some(id);
    self.draft = draft;
  }

  /// Marks the form as submitting. `false` when a save is already in flight.
  pub fn try_begin_submit(&mut self) -> bool {
    !std::mem::replace(&mut self.submitting, true)
  }

  /// Back to an empty "create" form.
  pub fn reset(&mut self) {
    self.draft = D::default();
    self.editing = None;
  }

  pub fn mode(&self) -> FormMode {
    if self.editing.is_some() {
      FormMode::Update
    } else {
      FormMode::Create
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn edit_then_reset() {
    let mut form: FormState<String, u32> = FormState::default();
    assert_eq!(form.mode(), FormMode::Create);
    form.begin_edit(7, "draft".into());
    assert_eq!(form.mode(), FormMode::Update);
    form.reset();
    assert_eq!(form.mode(), FormMode::Create);
    assert!(form.draft.is_empty());
  }

  #[test]
  fn second_submit_is_refused_until_the_first_ends() {
    let mut form: FormState<String, u32> = FormState::default();
    assert!(form.try_begin_submit());
    assert!(!form.try_begin_submit());
    form.submitting = false;
    assert!(form.try_begin_submit());
  }
}
