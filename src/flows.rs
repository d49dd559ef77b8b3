//! Ready-made menu flows driven by the binary

use crate::config::MenuDefinition;
use crate::console::{Console, LineKind};
use crate::error::Result;
use crate::menu::{MenuStack, MenuValue, Selections};
use tracing::info;

pub const FRUITS: [&str; 4] = ["Apple", "Banana", "Orange", "Grapes"];
pub const DATA_FILES: [&str; 3] = ["data1.csv", "data2.json", "data3.txt"];
pub const CLASSES: [&str; 3] = ["A", "B", "C"];
pub const CHART_TYPES: [&str; 4] = ["Line Chart", "Bar Chart", "Scatter Plot", "Pie Chart"];

/// Built-in demonstration menus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Demo {
    /// One level: pick a fruit
    Fruit,
    /// Three levels: data file, class, chart types (multi-select)
    #[default]
    Charts,
}

/// Single-level fruit picker
pub fn fruit_menu<C: Console>(console: C) -> Result<Option<Selections>> {
    let mut menu = MenuStack::new(console);
    menu.add_option("Apple")
        .add_option("Banana")
        .add_options(["Orange", "Grapes"])
        .ask(Some("Select a Fruit"), Some("selection"))?;

    let selections = menu.run_to_completion()?;
    let console = menu.console_mut();
    match selections.as_ref().and_then(|s| s.get("selection")) {
        Some(choice) => {
            info!(selection = %choice, "Fruit menu confirmed");
            console.write_line(LineKind::Plain, "")?;
            console.write_line(LineKind::Plain, &format!("You selected: {}", choice))?;
        }
        None => {
            info!("Fruit menu cancelled");
            console.write_line(LineKind::Notice, "Quit...")?;
        }
    }
    Ok(selections)
}

/// Three-level chart builder: data file, class, then chart types
pub fn chart_menu<C: Console>(console: C) -> Result<Option<Selections>> {
    let mut menu = MenuStack::new(console);
    menu.add_options(DATA_FILES)
        .ask(Some("Select a Data File"), Some("file"))?
        .add_options(CLASSES)
        .ask(Some("Select a Class"), Some("class_name"))?
        .add_options(CHART_TYPES)
        .allow_multiple()
        .ask(Some("Select Chart Types"), Some("chart_type_list"))?;

    let selections = menu.run_to_completion()?;
    let console = menu.console_mut();
    let Some(selections) = selections else {
        info!("Chart menu cancelled");
        console.write_line(LineKind::Notice, "Quit...")?;
        return Ok(None);
    };

    let file = selections.get("file").map(ToString::to_string).unwrap_or_default();
    let class_name = selections
        .get("class_name")
        .map(ToString::to_string)
        .unwrap_or_default();
    let types = selections
        .get("chart_type_list")
        .map(MenuValue::labels)
        .unwrap_or_default()
        .join(", ");

    info!(%file, %class_name, types = %types, "Chart menu confirmed");
    console.write_line(
        LineKind::Plain,
        &format!("Class {} with file={}, types=[{}]", class_name, file, types),
    )?;
    console.write_line(LineKind::Plain, "")?;
    console.write_line(LineKind::Plain, &format!("You selected: {}", file))?;
    Ok(Some(selections))
}

/// Walk every level of a loaded definition, then confirm
pub fn definition_menu<C: Console>(
    definition: &MenuDefinition,
    console: C,
) -> Result<Option<Selections>> {
    let mut menu = definition.build(console);
    info!(levels = menu.len(), "Running menu definition");
    menu.ask(None, None)?;
    let selections = menu.run_to_completion()?;

    if selections.is_none() {
        menu.console_mut().write_line(LineKind::Notice, "Quit...")?;
    }
    Ok(selections)
}
