//! The multi-level menu state machine

use super::input::{self, Confirmation};
use super::level::Level;
use super::render::{self, Lines};
use super::value::{MenuValue, Selections};
use crate::console::{Console, LineKind};
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::error::Result;

/// What the final confirmation produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user accepted the keyed answers
    Confirmed(Selections),
    /// The user quit earlier, or declined the selections
    Cancelled,
    /// The cursor is back on the first level; call [`MenuStack::ask`] to redo the answers
    Restart,
    /// The cursor was left where the walk ended; call [`MenuStack::ask`] to continue from there
    Resume,
}

/// Ordered stack of menu levels walked through with text prompts
///
/// Configuration calls touch the current level only. [`ask`](Self::ask)
/// prompts until the user reaches a level that has no options yet, at
/// which point control returns to the caller to configure it.
pub struct MenuStack<C: Console> {
    levels: Vec<Level>,
    current: usize,
    quit: bool,
    ended: bool,
    console: C,
    diagnostics: Box<dyn Diagnostics>,
}

impl<C: Console> MenuStack<C> {
    /// Create a stack holding one empty level
    pub fn new(console: C) -> Self {
        Self::from_levels(console, Vec::new())
    }

    /// Create a stack pre-populated with `levels`.
    ///
    /// An empty list yields the same single empty level as [`new`](Self::new).
    pub fn from_levels(console: C, mut levels: Vec<Level>) -> Self {
        if levels.is_empty() {
            levels.push(Level::default());
        }
        Self {
            levels,
            current: 0,
            quit: false,
            ended: false,
            console,
            diagnostics: Box::new(TracingDiagnostics),
        }
    }

    /// Replace the diagnostic sink
    pub fn with_diagnostics(mut self, diagnostics: impl Diagnostics + 'static) -> Self {
        self.diagnostics = Box::new(diagnostics);
        self
    }

    // ------------------------------------------------------------------
    // Configuration of the current level
    // ------------------------------------------------------------------

    pub fn set_title(&mut self, title: &str) -> &mut Self {
        if self.quit {
            return self;
        }
        self.levels[self.current].title = title.to_string();
        self
    }

    pub fn set_key(&mut self, key: &str) -> &mut Self {
        if self.quit {
            return self;
        }
        self.levels[self.current].key = Some(key.to_string());
        self
    }

    pub fn add_option(&mut self, label: impl Into<String>) -> &mut Self {
        if self.quit {
            return self;
        }
        let label = label.into();
        self.diagnostics
            .record(&format!("level {}: added option {:?}", self.current, label));
        self.levels[self.current].options.push(label);
        self
    }

    pub fn add_options<I, S>(&mut self, labels: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for label in labels {
            self.add_option(label);
        }
        self
    }

    pub fn allow_multiple(&mut self) -> &mut Self {
        if self.quit {
            return self;
        }
        self.levels[self.current].multiple_allowed = true;
        self.diagnostics
            .record(&format!("level {}: multiple selection allowed", self.current));
        self
    }

    // ------------------------------------------------------------------
    // State inspection
    // ------------------------------------------------------------------

    pub fn has_quit(&self) -> bool {
        self.quit
    }

    pub fn has_ended(&self) -> bool {
        self.ended
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_level(&self) -> &Level {
        &self.levels[self.current]
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false: a stack holds at least one level
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    // ------------------------------------------------------------------
    // Prompting
    // ------------------------------------------------------------------

    /// Prompt the current level, applying `title` and `key` to it first.
    ///
    /// Valid answers are stored and the cursor advances; prompting goes
    /// on into the next level when it already has options. Returns once
    /// the cursor lands on an unconfigured level or the user quits.
    /// Invalid answers are reported and the same level is asked again.
    pub fn ask(&mut self, title: Option<&str>, key: Option<&str>) -> Result<&mut Self> {
        if self.quit {
            return Ok(self);
        }
        if self.ended {
            self.diagnostics.record("re-entering the flow after results were assembled");
            self.ended = false;
        }
        if let Some(key) = key {
            self.set_key(key);
        }
        if let Some(title) = title {
            self.set_title(title);
        }

        loop {
            self.emit(render::question(&self.levels, self.current))?;

            let Some(raw) = self.console.read_line(render::PROMPT)? else {
                self.diagnostics.record("input closed at prompt");
                self.abandon()?;
                return Ok(self);
            };
            let choice = input::normalize(&raw);

            if choice == "q" {
                self.abandon()?;
                return Ok(self);
            }

            if choice == "r" {
                if self.has_parent() {
                    self.say(LineKind::Plain, "")?;
                    self.say(LineKind::Notice, render::MSG_RETURNING)?;
                    self.to_parent();
                } else {
                    self.say(LineKind::Error, render::MSG_INVALID)?;
                }
                continue;
            }

            match self.interpret(&choice) {
                Ok(value) => {
                    self.store_and_advance(value);
                    if self.current_level().is_unconfigured() {
                        return Ok(self);
                    }
                }
                Err(message) => self.say(LineKind::Error, message)?,
            }
        }
    }

    /// Turn a normalized answer into a value for the current level
    fn interpret(&self, choice: &str) -> std::result::Result<MenuValue, &'static str> {
        let level = self.current_level();
        let options = level.options();

        if level.multiple_allowed() {
            let indices = input::parse_indices(choice, options.len())
                .map_err(|_| render::MSG_INVALID_FORMAT)?;
            if indices.is_empty() {
                return Err(render::MSG_EMPTY_SELECTION);
            }
            Ok(MenuValue::Multiple(
                indices.into_iter().map(|i| options[i].clone()).collect(),
            ))
        } else {
            input::parse_single(choice, options.len())
                .map(|i| MenuValue::Single(options[i].clone()))
                .ok_or(render::MSG_INVALID)
        }
    }

    // ------------------------------------------------------------------
    // Result assembly
    // ------------------------------------------------------------------

    /// Collect the keyed answers and ask the user to confirm them.
    ///
    /// After a quit this returns [`Outcome::Cancelled`] without output.
    /// Called again once results were already assembled (and no
    /// [`ask`](Self::ask) happened since), it returns [`Outcome::Resume`]
    /// without prompting.
    pub fn get_all_results(&mut self) -> Result<Outcome> {
        if self.quit {
            self.diagnostics.record("results requested after quit");
            return Ok(Outcome::Cancelled);
        }
        if self.ended {
            self.diagnostics.record("results already assembled, resuming");
            return Ok(Outcome::Resume);
        }
        self.ended = true;

        if self.levels.len() > 1 && self.levels.last().is_some_and(Level::is_unconfigured) {
            self.remove_last();
        }

        let selections = self.collect();
        self.emit(render::preview(&selections))?;

        loop {
            self.say(LineKind::Plain, "")?;
            let Some(raw) = self.console.read_line(render::CONFIRM_PROMPT)? else {
                self.diagnostics.record("input closed at confirmation");
                return Ok(Outcome::Cancelled);
            };

            match Confirmation::parse(&input::normalize(&raw)) {
                Some(Confirmation::Accept) => return Ok(Outcome::Confirmed(selections)),
                Some(Confirmation::Reject) => return Ok(Outcome::Cancelled),
                Some(Confirmation::Restart) => {
                    self.current = 0;
                    self.check_index_validity();
                    return Ok(Outcome::Restart);
                }
                Some(Confirmation::Last) => return Ok(Outcome::Resume),
                None => self.say(LineKind::Error, render::MSG_INVALID_CONFIRM)?,
            }
        }
    }

    /// Confirm results, re-entering the prompts on restart or resume,
    /// until the user accepts (`Some`) or quits or declines (`None`)
    pub fn run_to_completion(&mut self) -> Result<Option<Selections>> {
        loop {
            match self.get_all_results()? {
                Outcome::Confirmed(selections) => return Ok(Some(selections)),
                Outcome::Cancelled => return Ok(None),
                Outcome::Restart | Outcome::Resume => {
                    self.ask(None, None)?;
                }
            }
        }
    }

    fn collect(&self) -> Selections {
        let mut selections = Selections::new();
        for level in &self.levels {
            if let (Some(key), Some(result)) = (level.key(), level.result()) {
                selections.insert(key, result.clone());
            }
        }
        selections
    }

    // ------------------------------------------------------------------
    // Cursor movement
    // ------------------------------------------------------------------

    fn has_parent(&self) -> bool {
        self.current > 0
    }

    fn to_parent(&mut self) {
        self.diagnostics.record(&format!(
            "index from {} to {}",
            self.current,
            self.current - 1
        ));
        self.current -= 1;
        self.check_index_validity();
    }

    fn to_next(&mut self) {
        self.current += 1;
        if self.current >= self.levels.len() {
            self.levels.push(Level::default());
        }
        self.check_index_validity();
    }

    fn remove_last(&mut self) {
        self.levels.pop();
        if self.current >= self.levels.len() {
            self.current = self.levels.len() - 1;
        }
        self.diagnostics.record(&format!(
            "removed unconfigured tail, {} levels remain",
            self.levels.len()
        ));
        self.check_index_validity();
    }

    fn store_and_advance(&mut self, value: MenuValue) {
        self.diagnostics.record(&format!(
            "saved result {:?} = {}",
            self.levels[self.current].key(),
            value
        ));
        self.levels[self.current].result = Some(value);
        self.to_next();
    }

    fn abandon(&mut self) -> Result<()> {
        self.say(LineKind::Notice, render::MSG_EXITING)?;
        self.quit = true;
        Ok(())
    }

    fn check_index_validity(&self) {
        assert!(
            self.current < self.levels.len(),
            "menu index {} out of range for {} levels",
            self.current,
            self.levels.len()
        );
    }

    // ------------------------------------------------------------------
    // Output
    // ------------------------------------------------------------------

    fn emit(&mut self, lines: Lines) -> Result<()> {
        for (kind, line) in lines {
            self.console.write_line(kind, &line)?;
        }
        Ok(())
    }

    fn say(&mut self, kind: LineKind, line: &str) -> Result<()> {
        self.console.write_line(kind, line)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::diagnostics::Silent;
    use std::cell::RefCell;
    use std::rc::Rc;

    const FILES: [&str; 3] = ["data1.csv", "data2.json", "data3.txt"];
    const CLASSES: [&str; 3] = ["A", "B", "C"];
    const CHARTS: [&str; 4] = ["Line Chart", "Bar Chart", "Scatter Plot", "Pie Chart"];

    fn menu(console: &mut ScriptedConsole) -> MenuStack<&mut ScriptedConsole> {
        MenuStack::new(console).with_diagnostics(Silent)
    }

    fn three_levels(menu: &mut MenuStack<&mut ScriptedConsole>) -> Result<()> {
        menu.add_options(FILES)
            .ask(Some("Select a Data File"), Some("file"))?
            .add_options(CLASSES)
            .ask(Some("Select a Class"), Some("class_name"))?
            .add_options(CHARTS)
            .allow_multiple()
            .ask(Some("Select Chart Types"), Some("chart_type_list"))?;
        Ok(())
    }

    fn single(value: &str) -> MenuValue {
        MenuValue::from(value)
    }

    fn multiple(values: &[&str]) -> MenuValue {
        MenuValue::Multiple(values.iter().map(|v| v.to_string()).collect())
    }

    #[test]
    fn test_new_stack_has_one_empty_level() {
        let mut console = ScriptedConsole::default();
        let menu = menu(&mut console);
        assert_eq!(menu.len(), 1);
        assert!(!menu.is_empty());
        assert_eq!(menu.current_index(), 0);
        assert!(menu.current_level().is_unconfigured());
        assert!(!menu.has_quit());
        assert!(!menu.has_ended());
    }

    #[test]
    fn test_configuration_touches_current_level() {
        let mut console = ScriptedConsole::default();
        let mut menu = menu(&mut console);
        menu.set_title("Pick")
            .set_key("pick")
            .add_option("")
            .add_option("")
            .add_options(vec!["x".to_string()])
            .allow_multiple();

        let level = menu.current_level();
        assert_eq!(level.title(), "Pick");
        assert_eq!(level.key(), Some("pick"));
        assert_eq!(level.options(), &["", "", "x"]);
        assert!(level.multiple_allowed());
    }

    #[test]
    fn test_single_level_selection() {
        let mut console = ScriptedConsole::new(["0", "y"]);
        let mut menu = menu(&mut console);
        menu.add_option("Apple")
            .add_option("Banana")
            .add_options(["Orange", "Grapes"])
            .ask(Some("Select a Fruit"), Some("selection"))
            .unwrap();

        assert_eq!(menu.len(), 2);
        let outcome = menu.get_all_results().unwrap();
        assert_eq!(menu.len(), 1);

        match outcome {
            Outcome::Confirmed(selections) => {
                assert_eq!(selections.len(), 1);
                assert_eq!(selections.get("selection"), Some(&single("Apple")));
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        drop(menu);
        assert!(console.contains("Step 1: Select a Fruit"));
        assert!(console.contains(render::MSG_CURRENT_SELECTIONS));
        assert!(console.contains("selection: Apple"));
    }

    #[test]
    fn test_three_level_scenario() {
        let mut console = ScriptedConsole::new(["2", "0", "1,2 3", "y"]);
        let mut menu = menu(&mut console);
        three_levels(&mut menu).unwrap();

        let Outcome::Confirmed(selections) = menu.get_all_results().unwrap() else {
            panic!("expected confirmed selections");
        };
        assert_eq!(selections.len(), 3);
        assert_eq!(selections.get("file"), Some(&single("data3.txt")));
        assert_eq!(selections.get("class_name"), Some(&single("A")));
        assert_eq!(
            selections.get("chart_type_list"),
            Some(&multiple(&["Bar Chart", "Scatter Plot", "Pie Chart"]))
        );
        drop(menu);
        assert!(console.contains("History: file=data3.txt -> class_name=A"));
    }

    #[test]
    fn test_quit_cancels_and_silences_further_calls() {
        let mut console = ScriptedConsole::new(["0", "q", "1", "1"]);
        let mut menu = menu(&mut console);
        three_levels(&mut menu).unwrap();

        assert!(menu.has_quit());
        assert_eq!(menu.current_index(), 1);
        assert_eq!(menu.current_level().options(), &CLASSES);
        assert!(!menu.current_level().multiple_allowed());
        assert_eq!(menu.get_all_results().unwrap(), Outcome::Cancelled);
        assert_eq!(menu.get_all_results().unwrap(), Outcome::Cancelled);

        drop(menu);
        assert_eq!(console.prompts_shown(), 2);
        assert_eq!(console.remaining_answers(), 2);
        assert!(console.contains(render::MSG_EXITING));
        assert!(!console.contains("Step 3"));
        assert!(!console.contains(render::MSG_CURRENT_SELECTIONS));
    }

    #[test]
    fn test_invalid_then_quit() {
        let mut console = ScriptedConsole::new(["5", "q"]);
        let mut menu = menu(&mut console);
        menu.add_options(["Apple", "Banana", "Orange"])
            .ask(Some("Select a Fruit"), Some("selection"))
            .unwrap();

        assert_eq!(menu.get_all_results().unwrap(), Outcome::Cancelled);
        drop(menu);
        assert!(console.contains(render::MSG_INVALID));
        assert!(console.contains(render::MSG_EXITING));
    }

    #[test]
    fn test_end_of_input_quits() {
        let mut console = ScriptedConsole::new(["zzz"]);
        let mut menu = menu(&mut console);
        menu.add_options(["Apple"]).ask(None, None).unwrap();

        assert!(menu.has_quit());
        assert_eq!(menu.get_all_results().unwrap(), Outcome::Cancelled);
    }

    #[test]
    fn test_return_to_parent_keeps_stored_answer() {
        let mut console = ScriptedConsole::new(["1", "r", "q"]);
        let levels = vec![
            Level::new().with_title("First").with_key("first").with_options(CLASSES),
            Level::new().with_title("Second").with_key("second").with_options(FILES),
        ];
        let mut menu = MenuStack::from_levels(&mut console, levels).with_diagnostics(Silent);
        menu.ask(None, None).unwrap();

        assert!(menu.has_quit());
        assert_eq!(menu.current_index(), 0);
        assert_eq!(menu.levels()[0].result(), Some(&single("B")));
        drop(menu);
        assert_eq!(console.count("Step 1: First"), 2);
        assert_eq!(console.count("Step 2: Second"), 1);
        assert!(console.contains(render::MSG_RETURNING));
    }

    #[test]
    fn test_return_at_root_is_invalid() {
        let mut console = ScriptedConsole::new(["r", "r", "q"]);
        let mut menu = menu(&mut console);
        menu.add_options(CHARTS).allow_multiple().ask(None, None).unwrap();

        drop(menu);
        assert_eq!(console.count(render::MSG_INVALID), 2);
        assert!(!console.contains(render::MSG_RETURNING));
        assert!(!console.contains(render::MSG_INVALID_FORMAT));
    }

    #[test]
    fn test_multi_select_order_and_filtering() {
        let mut console = ScriptedConsole::new(["3 1, 1 7"]);
        let mut menu = menu(&mut console);
        menu.add_options(["A", "B", "C", "D"])
            .allow_multiple()
            .set_key("picked")
            .ask(None, None)
            .unwrap();

        assert_eq!(menu.current_index(), 1);
        assert_eq!(menu.levels()[0].result(), Some(&multiple(&["D", "B"])));
    }

    #[test]
    fn test_multi_select_rejects_empty_selection() {
        let mut console = ScriptedConsole::new(["9 10", "", "0"]);
        let mut menu = menu(&mut console);
        menu.add_options(["A", "B", "C", "D"]).allow_multiple().ask(None, None).unwrap();

        assert_eq!(menu.levels()[0].result(), Some(&multiple(&["A"])));
        drop(menu);
        assert_eq!(console.count(render::MSG_EMPTY_SELECTION), 2);
        assert_eq!(console.count("Step 1: "), 3);
    }

    #[test]
    fn test_multi_select_rejects_bad_format() {
        let mut console = ScriptedConsole::new(["a, b", "q"]);
        let mut menu = menu(&mut console);
        menu.add_options(["A", "B"]).allow_multiple().ask(None, None).unwrap();

        assert!(menu.levels()[0].result().is_none());
        drop(menu);
        assert!(console.contains(render::MSG_INVALID_FORMAT));
    }

    #[test]
    fn test_prebuilt_stack_runs_end_to_end() {
        let mut console = ScriptedConsole::new(["1", "2", "0 3", "y"]);
        let levels = vec![
            Level::new().with_key("file").with_options(FILES),
            Level::new().with_key("class_name").with_options(CLASSES),
            Level::new().with_key("charts").with_options(CHARTS).with_multiple(true),
        ];
        let mut menu = MenuStack::from_levels(&mut console, levels).with_diagnostics(Silent);
        menu.ask(None, None).unwrap();
        assert_eq!(menu.len(), 4);
        assert_eq!(menu.current_index(), 3);

        let selections = menu.run_to_completion().unwrap().unwrap();
        assert_eq!(selections.get("file"), Some(&single("data2.json")));
        assert_eq!(selections.get("class_name"), Some(&single("C")));
        assert_eq!(selections.get("charts"), Some(&multiple(&["Line Chart", "Pie Chart"])));
        assert_eq!(menu.len(), 3);
    }

    #[test]
    fn test_unkeyed_and_unanswered_levels_are_excluded() {
        let mut console = ScriptedConsole::new(["y"]);
        let levels = vec![
            Level::new().with_options(["hidden"]),
            Level::new().with_key("never").with_options(["x"]),
        ];
        let mut menu = MenuStack::from_levels(&mut console, levels).with_diagnostics(Silent);
        menu.levels[0].result = Some(single("hidden"));

        let Outcome::Confirmed(selections) = menu.get_all_results().unwrap() else {
            panic!("expected confirmed selections");
        };
        assert!(selections.is_empty());
        assert_eq!(menu.len(), 2);
    }

    #[test]
    fn test_keyed_tail_level_removed_when_unconfigured() {
        let mut console = ScriptedConsole::new(["0", "y"]);
        let mut menu = menu(&mut console);
        menu.add_options(FILES).ask(None, Some("file")).unwrap();
        menu.set_key("unused");

        let Outcome::Confirmed(selections) = menu.get_all_results().unwrap() else {
            panic!("expected confirmed selections");
        };
        assert_eq!(menu.len(), 1);
        assert_eq!(menu.current_index(), 0);
        assert_eq!(selections.keys().collect::<Vec<_>>(), vec!["file"]);
    }

    #[test]
    fn test_decline_returns_cancelled() {
        let mut console = ScriptedConsole::new(["0", "maybe", "n"]);
        let mut menu = menu(&mut console);
        menu.add_options(FILES).ask(None, Some("file")).unwrap();

        assert_eq!(menu.get_all_results().unwrap(), Outcome::Cancelled);
        assert!(!menu.has_quit());
        drop(menu);
        assert!(console.contains(render::MSG_INVALID_CONFIRM));
    }

    #[test]
    fn test_restart_allows_different_answers() {
        let mut console = ScriptedConsole::new(["0", "0", "2, 3", "r", "1", "1", "1, 3 4", "y"]);
        let mut menu = menu(&mut console);
        three_levels(&mut menu).unwrap();

        assert_eq!(menu.get_all_results().unwrap(), Outcome::Restart);
        assert_eq!(menu.current_index(), 0);
        assert!(menu.has_ended());
        assert_eq!(menu.levels()[0].result(), Some(&single("data1.csv")));

        menu.ask(None, None).unwrap();
        assert!(!menu.has_ended());

        let Outcome::Confirmed(selections) = menu.get_all_results().unwrap() else {
            panic!("expected confirmed selections");
        };
        assert_eq!(selections.get("file"), Some(&single("data2.json")));
        assert_eq!(selections.get("class_name"), Some(&single("B")));
        assert_eq!(
            selections.get("chart_type_list"),
            Some(&multiple(&["Bar Chart", "Pie Chart"]))
        );
        assert_eq!(menu.len(), 3);
    }

    #[test]
    fn test_last_resumes_at_final_level() {
        let mut console = ScriptedConsole::new(["0", "0", "1", "l", "2", "y"]);
        let mut menu = menu(&mut console);
        three_levels(&mut menu).unwrap();

        assert_eq!(menu.get_all_results().unwrap(), Outcome::Resume);
        assert_eq!(menu.current_index(), 2);

        let selections = menu.run_to_completion().unwrap().unwrap();
        assert_eq!(selections.get("chart_type_list"), Some(&multiple(&["Scatter Plot"])));
        drop(menu);
        assert_eq!(console.count("Step 3: Select Chart Types"), 2);
    }

    #[test]
    fn test_second_assembly_without_ask_resumes() {
        let mut console = ScriptedConsole::new(["0", "y"]);
        let mut menu = menu(&mut console);
        menu.add_options(FILES).ask(None, Some("file")).unwrap();

        assert!(matches!(menu.get_all_results().unwrap(), Outcome::Confirmed(_)));
        assert_eq!(menu.get_all_results().unwrap(), Outcome::Resume);
        drop(menu);
        assert_eq!(console.count(render::MSG_CURRENT_SELECTIONS), 1);
        assert_eq!(console.prompts_shown(), 2);
    }

    #[test]
    fn test_run_to_completion_after_quit_during_restart() {
        let mut console = ScriptedConsole::new(["0", "r", "q"]);
        let mut menu = menu(&mut console);
        menu.add_options(FILES).ask(None, Some("file")).unwrap();

        assert_eq!(menu.run_to_completion().unwrap(), None);
        assert!(menu.has_quit());
    }

    #[test]
    fn test_diagnostics_are_recorded() {
        let records = Rc::new(RefCell::new(Vec::<String>::new()));
        let sink = Rc::clone(&records);

        let mut console = ScriptedConsole::new(["0"]);
        let mut menu = MenuStack::new(&mut console)
            .with_diagnostics(move |message: &str| sink.borrow_mut().push(message.to_string()));
        menu.add_options(["A", "B"]).set_key("k").ask(None, None).unwrap();

        let records = records.borrow();
        assert!(records.iter().any(|r| r.contains("added option \"A\"")));
        assert!(records.iter().any(|r| r.starts_with("saved result")));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_violation_panics() {
        let mut console = ScriptedConsole::default();
        let mut menu = menu(&mut console);
        menu.current = 3;
        menu.check_index_validity();
    }
}
