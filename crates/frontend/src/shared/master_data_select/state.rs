use contracts::shared::master_data::SelectOption;

/// Номер запроса опций
///
/// Каждый запуск загрузки получает следующий номер; применяется только
/// ответ на последний выданный номер.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    seq: u64,
    search: Option<String>,
}

impl LoadTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Поисковая строка запроса; `None` означает начальный (нефильтрованный) набор
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }
}

/// Результат применения ответа поставщика опций
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome<E> {
    Applied,
    /// Ответ устарел: после него был выдан более новый запрос
    Discarded,
    /// Поставщик вернул ошибку; список опций очищен
    Failed(E),
}

/// Состояние выпадающего списка справочника
///
/// Не зависит от рантайма и DOM: компонент только вызывает переходы и
/// отображает поля. Если поставщик так и не ответил, `is_loading`
/// остаётся `true` до следующего запроса (таймаутов нет).
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState<X> {
    selected_value: Option<String>,
    selected_option: Option<SelectOption<X>>,
    is_open: bool,
    search_query: String,
    is_loading: bool,
    options: Vec<SelectOption<X>>,
    loaded: bool,
    latest_seq: u64,
    allow_clear: bool,
}

impl<X: Clone> SelectionState<X> {
    pub fn new(allow_clear: bool) -> Self {
        Self {
            selected_value: None,
            selected_option: None,
            is_open: false,
            search_query: String::new(),
            is_loading: false,
            options: Vec::new(),
            loaded: false,
            latest_seq: 0,
            allow_clear,
        }
    }

    pub fn selected_value(&self) -> Option<&str> {
        self.selected_value.as_deref()
    }

    pub fn selected_option(&self) -> Option<&SelectOption<X>> {
        self.selected_option.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn options(&self) -> &[SelectOption<X>] {
        &self.options
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn allow_clear(&self) -> bool {
        self.allow_clear
    }

    /// Текст в поле выбора: метка выбранной опции, иначе сам идентификатор
    pub fn display_label(&self) -> Option<String> {
        match (&self.selected_option, &self.selected_value) {
            (Some(option), _) => Some(option.label.clone()),
            (None, Some(value)) => Some(value.clone()),
            (None, None) => None,
        }
    }

    fn issue(&mut self, search: Option<String>) -> LoadTicket {
        self.latest_seq += 1;
        self.is_loading = true;
        LoadTicket {
            seq: self.latest_seq,
            search,
        }
    }

    /// Загрузка при монтировании, если опций ещё нет и ничего не грузится
    pub fn preload(&mut self) -> Option<LoadTicket> {
        if self.loaded || self.is_loading {
            return None;
        }
        self.search_query.clear();
        Some(self.issue(None))
    }

    /// Открыть список. Повторное открытие ничего не делает.
    pub fn open(&mut self) -> Option<LoadTicket> {
        if self.is_open {
            return None;
        }
        self.is_open = true;
        self.preload()
    }

    /// Закрыть список (клик вне, Escape); выбор сохраняется
    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn on_search_input(&mut self, text: &str) -> LoadTicket {
        self.search_query = text.to_string();
        let term = text.trim();
        let search = (!term.is_empty()).then(|| term.to_string());
        self.issue(search)
    }

    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.seq == self.latest_seq
    }

    pub fn complete_load<E>(
        &mut self,
        ticket: &LoadTicket,
        result: Result<Vec<SelectOption<X>>, E>,
    ) -> LoadOutcome<E> {
        if !self.is_current(ticket) {
            return LoadOutcome::Discarded;
        }
        self.is_loading = false;

        match result {
            Ok(options) => {
                self.options = options;
                self.loaded = true;
                self.resolve_selected();
                LoadOutcome::Applied
            }
            Err(e) => {
                self.options.clear();
                self.loaded = false;
                LoadOutcome::Failed(e)
            }
        }
    }

    /// Выбрать опцию по значению; повторный выбор снимает выбор, если это разрешено
    pub fn select(&mut self, value: &str) {
        if self.allow_clear && self.selected_value.as_deref() == Some(value) {
            self.reset_selection();
        } else {
            self.selected_value = Some(value.to_string());
            self.selected_option = self.find(value);
        }
        self.is_open = false;
    }

    pub fn clear(&mut self) -> bool {
        if !self.allow_clear {
            return false;
        }
        let had_value = self.selected_value.is_some();
        self.reset_selection();
        had_value
    }

    /// Значение, заданное снаружи (управляемый компонент)
    pub fn set_value(&mut self, value: Option<String>) {
        if self.selected_value == value {
            return;
        }
        self.selected_option = value.as_deref().and_then(|v| self.find(v));
        if value.is_some() && self.selected_option.is_none() {
            self.loaded = false;
        }
        self.selected_value = value;
    }

    fn reset_selection(&mut self) {
        self.selected_value = None;
        self.selected_option = None;
    }

    fn find(&self, value: &str) -> Option<SelectOption<X>> {
        self.options.iter().find(|o| o.value == value).cloned()
    }

    fn resolve_selected(&mut self) {
        let Some(value) = self.selected_value.as_deref() else {
            return;
        };
        let resolved = self
            .selected_option
            .as_ref()
            .is_some_and(|option| option.value == value);
        if !resolved {
            self.selected_option = self.find(value);
        }
    }
}
