use crate::employee::SearchCriteria;

/// Input cap for the employee number field, matching the backend's code width
pub const EMPLOYEE_NUMBER_MAX_CHARS: usize = 10;
/// Input cap for the name field
pub const NAME_MAX_CHARS: usize = 50;

/// Which element of the criteria form is focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    EmployeeNumber,
    Name,
    Search,
    Clear,
}

impl FormField {
    pub fn next(&self) -> Self {
        match self {
            FormField::EmployeeNumber => FormField::Name,
            FormField::Name => FormField::Search,
            FormField::Search => FormField::Clear,
            FormField::Clear => FormField::EmployeeNumber,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FormField::EmployeeNumber => FormField::Clear,
            FormField::Name => FormField::EmployeeNumber,
            FormField::Search => FormField::Name,
            FormField::Clear => FormField::Search,
        }
    }

    pub fn is_text_input(&self) -> bool {
        matches!(self, FormField::EmployeeNumber | FormField::Name)
    }
}

/// Criteria form state: two text fields plus the Search/Clear buttons.
/// Cursors are byte offsets into the field strings.
pub struct CriteriaForm {
    pub focused_field: FormField,
    pub employee_number: String,
    pub employee_number_cursor: usize,
    pub name: String,
    pub name_cursor: usize,
}

impl Default for CriteriaForm {
    fn default() -> Self {
        Self {
            focused_field: FormField::EmployeeNumber,
            employee_number: String::new(),
            employee_number_cursor: 0,
            name: String::new(),
            name_cursor: 0,
        }
    }
}

impl CriteriaForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text buffer, cursor, and input cap for the focused field
    fn current_text_mut(&mut self) -> Option<(&mut String, &mut usize, usize)> {
        match self.focused_field {
            FormField::EmployeeNumber => Some((
                &mut self.employee_number,
                &mut self.employee_number_cursor,
                EMPLOYEE_NUMBER_MAX_CHARS,
            )),
            FormField::Name => Some((&mut self.name, &mut self.name_cursor, NAME_MAX_CHARS)),
            _ => None,
        }
    }

    /// Snapshot of the criteria as entered
    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            employee_number: self.employee_number.clone(),
            name: self.name.clone(),
        }
    }

    pub fn focus_next(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// Insert at the cursor of the focused field. Keystrokes beyond the
    /// field's cap are dropped, the way the original form's maxLength worked.
    pub fn insert_char(&mut self, c: char) {
        let Some((text, cursor, max_chars)) = self.current_text_mut() else {
            return;
        };
        if text.chars().count() >= max_chars {
            return;
        }
        text.insert(*cursor, c);
        *cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        let Some((text, cursor, _)) = self.current_text_mut() else {
            return;
        };
        if *cursor > 0 {
            // Find the previous character boundary
            let prev = text[..*cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            text.remove(prev);
            *cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        let Some((text, cursor, _)) = self.current_text_mut() else {
            return;
        };
        if *cursor < text.len() {
            text.remove(*cursor);
        }
    }

    pub fn cursor_left(&mut self) {
        let Some((text, cursor, _)) = self.current_text_mut() else {
            return;
        };
        if *cursor > 0 {
            let prev = text[..*cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            *cursor = prev;
        }
    }

    pub fn cursor_right(&mut self) {
        let Some((text, cursor, _)) = self.current_text_mut() else {
            return;
        };
        if *cursor < text.len() {
            let next = text[*cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| *cursor + i)
                .unwrap_or(text.len());
            *cursor = next;
        }
    }

    pub fn cursor_home(&mut self) {
        if let Some((_, cursor, _)) = self.current_text_mut() {
            *cursor = 0;
        }
    }

    pub fn cursor_end(&mut self) {
        if let Some((text, cursor, _)) = self.current_text_mut() {
            *cursor = text.len();
        }
    }

    /// Reset both fields and refocus the first one
    pub fn clear_all(&mut self) {
        self.employee_number.clear();
        self.employee_number_cursor = 0;
        self.name.clear();
        self.name_cursor = 0;
        self.focused_field = FormField::EmployeeNumber;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(form: &mut CriteriaForm, s: &str) {
        for c in s.chars() {
            form.insert_char(c);
        }
    }

    #[test]
    fn focus_cycles_through_all_fields() {
        let mut form = CriteriaForm::new();
        assert_eq!(form.focused_field, FormField::EmployeeNumber);
        form.focus_next();
        assert_eq!(form.focused_field, FormField::Name);
        form.focus_next();
        assert_eq!(form.focused_field, FormField::Search);
        form.focus_next();
        assert_eq!(form.focused_field, FormField::Clear);
        form.focus_next();
        assert_eq!(form.focused_field, FormField::EmployeeNumber);
        form.focus_prev();
        assert_eq!(form.focused_field, FormField::Clear);
    }

    #[test]
    fn typing_fills_the_focused_field_only() {
        let mut form = CriteriaForm::new();
        type_str(&mut form, "DC0001");
        form.focus_next();
        type_str(&mut form, "山田");
        assert_eq!(form.employee_number, "DC0001");
        assert_eq!(form.name, "山田");
    }

    #[test]
    fn employee_number_is_capped_at_ten_chars() {
        let mut form = CriteriaForm::new();
        type_str(&mut form, "DC000100001234");
        assert_eq!(form.employee_number.chars().count(), EMPLOYEE_NUMBER_MAX_CHARS);
        assert_eq!(form.employee_number, "DC00010000");
    }

    #[test]
    fn name_is_capped_at_fifty_chars() {
        let mut form = CriteriaForm::new();
        form.focused_field = FormField::Name;
        type_str(&mut form, &"あ".repeat(60));
        assert_eq!(form.name.chars().count(), NAME_MAX_CHARS);
    }

    #[test]
    fn buttons_ignore_typing() {
        let mut form = CriteriaForm::new();
        form.focused_field = FormField::Search;
        form.insert_char('x');
        assert!(form.employee_number.is_empty());
        assert!(form.name.is_empty());
    }

    #[test]
    fn cursor_moves_over_multibyte_chars() {
        let mut form = CriteriaForm::new();
        form.focused_field = FormField::Name;
        type_str(&mut form, "山田");
        assert_eq!(form.name_cursor, "山田".len());
        form.cursor_left();
        assert_eq!(form.name_cursor, "山".len());
        form.insert_char('々');
        assert_eq!(form.name, "山々田");
        form.cursor_right();
        assert_eq!(form.name_cursor, form.name.len());
    }

    #[test]
    fn backspace_removes_the_previous_char() {
        let mut form = CriteriaForm::new();
        form.focused_field = FormField::Name;
        type_str(&mut form, "太郎");
        form.backspace();
        assert_eq!(form.name, "太");
        form.backspace();
        assert!(form.name.is_empty());
        // Backspace at the start is a no-op
        form.backspace();
        assert_eq!(form.name_cursor, 0);
    }

    #[test]
    fn delete_removes_the_char_under_the_cursor() {
        let mut form = CriteriaForm::new();
        type_str(&mut form, "DC1");
        form.cursor_home();
        form.delete();
        assert_eq!(form.employee_number, "C1");
        assert_eq!(form.employee_number_cursor, 0);
    }

    #[test]
    fn clear_all_resets_fields_and_focus() {
        let mut form = CriteriaForm::new();
        type_str(&mut form, "DC0001");
        form.focus_next();
        type_str(&mut form, "山田");
        form.focused_field = FormField::Clear;
        form.clear_all();
        assert!(form.employee_number.is_empty());
        assert!(form.name.is_empty());
        assert_eq!(form.employee_number_cursor, 0);
        assert_eq!(form.name_cursor, 0);
        assert_eq!(form.focused_field, FormField::EmployeeNumber);
    }

    #[test]
    fn criteria_snapshot_copies_both_fields() {
        let mut form = CriteriaForm::new();
        type_str(&mut form, "dc");
        let criteria = form.criteria();
        assert_eq!(criteria.employee_number, "dc");
        assert!(criteria.name.is_empty());
    }
}
