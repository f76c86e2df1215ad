use crate::model::Value;
use crate::parser::StepValue;
use crate::session::Session;
use crate::table::{discover_quantity_columns, quantities_for_set, DataFrame, SplitBy};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Table,
    Quantities,
    Inspector,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Table, Tab::Quantities, Tab::Inspector];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Tab::Table => "Table",
            Tab::Quantities => "Quantities",
            Tab::Inspector => "Inspector",
        }
    }

    fn next(self) -> Self {
        match self {
            Tab::Table => Tab::Quantities,
            Tab::Quantities => Tab::Inspector,
            Tab::Inspector => Tab::Table,
        }
    }
}

/// Attribute being rewritten from the inspector; `input` is STEP text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeEdit {
    pub id: u64,
    pub attribute: String,
    pub input: String,
}

pub struct App {
    pub session: Session,
    pub tab: Tab,
    /// Rows of the table tab: the whole table or one class of it.
    pub view: DataFrame,
    pub selected_class: usize, // 0 = "All", 1+ = class index
    pub selected_row: usize,
    pub column_offset: usize,
    pub selected_set: usize,
    pub selected_quantity: usize,
    pub split: SplitBy,
    pub selected_attribute: usize,
    pub editing: Option<AttributeEdit>,
    pub status: String,
    pub should_quit: bool,
}

impl App {
    /// Wraps a session whose table has already been loaded.
    #[must_use]
    pub fn new(session: Session) -> Self {
        let view = session.frame().cloned().unwrap_or_default();
        Self {
            session,
            tab: Tab::Table,
            view,
            selected_class: 0,
            selected_row: 0,
            column_offset: 0,
            selected_set: 0,
            selected_quantity: 0,
            split: SplitBy::Level,
            selected_attribute: 0,
            editing: None,
            status: String::new(),
            should_quit: false,
        }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        super::dashboard::draw(frame, self);
    }

    fn handle_events(&mut self) -> Result<()> {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                self.handle_key(key.code);
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        if self.editing.is_some() {
            self.handle_edit_keys(code);
            return;
        }
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.tab = self.tab.next(),
            KeyCode::Char('1') => self.tab = Tab::Table,
            KeyCode::Char('2') => self.tab = Tab::Quantities,
            KeyCode::Char('3') => self.tab = Tab::Inspector,
            KeyCode::Char('c') => self.export("CSV", Session::download_csv),
            KeyCode::Char('x') => self.export("Excel", Session::download_excel),
            KeyCode::Char('J') => self.export("JSON", Session::download_json),
            _ => match self.tab {
                Tab::Table => self.handle_table_keys(code),
                Tab::Quantities => self.handle_quantity_keys(code),
                Tab::Inspector => self.handle_inspector_keys(code),
            },
        }
    }

    fn export(
        &mut self,
        label: &str,
        download: fn(&Session) -> Result<std::path::PathBuf, crate::error::ExportError>,
    ) {
        self.status = match download(&self.session) {
            Ok(path) => format!("{label} written to {}", path.display()),
            Err(e) => {
                tracing::warn!(error = %e, "export failed");
                format!("{label} export failed: {e}")
            }
        };
    }

    fn handle_table_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_row = self.selected_row.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected_row + 1 < self.view.height() {
                    self.selected_row += 1;
                }
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.column_offset = self.column_offset.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.column_offset + 1 < self.view.width() {
                    self.column_offset += 1;
                }
            }
            KeyCode::Char('[') => self.select_class(self.selected_class.saturating_sub(1)),
            KeyCode::Char(']') => {
                if self.selected_class < self.session.classes().len() {
                    self.select_class(self.selected_class + 1);
                }
            }
            KeyCode::Enter => {
                if let Some(id) = self.selected_row_id() {
                    self.inspect(id, true);
                }
            }
            _ => {}
        }
    }

    fn select_class(&mut self, index: usize) {
        self.selected_class = index;
        self.selected_row = 0;
        self.column_offset = 0;
        self.selected_set = 0;
        self.selected_quantity = 0;
        let Some(frame) = self.session.frame() else {
            return;
        };
        self.view = match self.selected_class_name() {
            Some(class) => frame.filter_by_class(class),
            None => frame.clone(),
        };
    }

    /// Name of the class filter, `None` when all classes are shown.
    #[must_use]
    pub fn selected_class_name(&self) -> Option<&str> {
        self.selected_class
            .checked_sub(1)
            .and_then(|i| self.session.classes().get(i))
            .map(String::as_str)
    }

    fn selected_row_id(&self) -> Option<u64> {
        let index = self.view.column_index("ExpressId")?;
        match self.view.rows().get(self.selected_row)?.get(index)? {
            Value::Integer(id) => u64::try_from(*id).ok(),
            _ => None,
        }
    }

    fn handle_quantity_keys(&mut self, code: KeyCode) {
        let set_count = self.quantity_sets().len();
        match code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected_set = self.selected_set.saturating_sub(1);
                self.selected_quantity = 0;
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.selected_set + 1 < set_count {
                    self.selected_set += 1;
                    self.selected_quantity = 0;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_quantity = self.selected_quantity.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected_quantity + 1 < self.quantities().len() {
                    self.selected_quantity += 1;
                }
            }
            KeyCode::Char('s') => self.split = self.split.toggled(),
            _ => {}
        }
    }

    /// Quantity sets of the current view, empty when it has none.
    #[must_use]
    pub fn quantity_sets(&self) -> Vec<String> {
        discover_quantity_columns(&self.view).unwrap_or_default()
    }

    #[must_use]
    pub fn selected_set_name(&self) -> Option<String> {
        self.quantity_sets().into_iter().nth(self.selected_set)
    }

    /// Quantities of the selected set, ending with `Count`.
    #[must_use]
    pub fn quantities(&self) -> Vec<String> {
        self.selected_set_name()
            .map(|set| quantities_for_set(&self.view, &set))
            .unwrap_or_default()
    }

    fn handle_inspector_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_attribute = self.selected_attribute.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected_attribute + 1 < self.inspector_rows().len() {
                    self.selected_attribute += 1;
                }
            }
            KeyCode::Enter => {
                let target = self
                    .inspector_rows()
                    .get(self.selected_attribute)
                    .and_then(|(_, _, id)| *id);
                if let Some(id) = target {
                    self.inspect(id, false);
                }
            }
            KeyCode::Backspace => {
                if self.session.back().unwrap_or(false) {
                    self.selected_attribute = 0;
                }
            }
            KeyCode::Char('e') => self.start_edit(),
            _ => {}
        }
    }

    /// Opens the selected direct attribute for editing, prefilled with its
    /// current STEP text. Rows of an expanded list edit the whole list.
    fn start_edit(&mut self) {
        let debug = self.session.debug();
        // rows 0 and 1 are the id and class
        let row = debug
            .attributes
            .get(self.selected_attribute)
            .filter(|_| self.selected_attribute >= 2);
        let Some(row) = row else {
            self.status = "Only direct attributes can be edited".to_string();
            return;
        };
        let attribute = row.name.split(['[', '(']).next().unwrap_or_default().to_string();
        let id = debug.active_step_id;
        let input = self
            .session
            .model()
            .ok()
            .and_then(|model| model.attribute(id, &attribute))
            .map(StepValue::to_step)
            .unwrap_or_default();
        self.editing = Some(AttributeEdit { id, attribute, input });
    }

    fn handle_edit_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.editing = None,
            KeyCode::Enter => self.apply_edit(),
            KeyCode::Backspace => {
                if let Some(edit) = &mut self.editing {
                    edit.input.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(edit) = &mut self.editing {
                    edit.input.push(c);
                }
            }
            _ => {}
        }
    }

    fn apply_edit(&mut self) {
        let Some(edit) = self.editing.take() else {
            return;
        };
        let value = StepValue::parse(&edit.input);
        self.status = match self.session.set_attribute(edit.id, &edit.attribute, value) {
            Ok(()) => {
                self.select_class(self.selected_class);
                self.tab = Tab::Inspector;
                format!("#{}.{} updated", edit.id, edit.attribute)
            }
            Err(e) => {
                tracing::warn!(error = %e, "attribute edit rejected");
                e.to_string()
            }
        };
    }

    fn inspect(&mut self, id: u64, reset: bool) {
        match self.session.inspect(id, reset) {
            Ok(true) => self.status.clear(),
            Ok(false) => self.status = format!("#{id} does not exist"),
            Err(e) => self.status = e.to_string(),
        }
        self.tab = Tab::Inspector;
        self.selected_attribute = 0;
    }

    /// Every inspector line as `(name, value, followable id)`: direct
    /// attributes, then inverse attributes, then inverse references.
    #[must_use]
    pub fn inspector_rows(&self) -> Vec<(String, String, Option<u64>)> {
        let debug = self.session.debug();
        debug
            .attributes
            .iter()
            .chain(&debug.inverse_attributes)
            .map(|r| (r.name.clone(), r.string_value.clone(), r.entity_id))
            .chain(
                debug
                    .inverse_references
                    .iter()
                    .map(|r| (String::from("<-"), r.string_value.clone(), Some(r.entity_id))),
            )
            .collect()
    }
}
