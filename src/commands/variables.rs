use roli_dash::Result;
use roli_dash::dataset::{VARIABLE_DEFINITIONS, VariableCategory};

/// Print every variable key with its display label, grouped the way the
/// dashboard's variable picker groups them.
pub fn list_variables() -> Result<()> {
    let mut current: Option<VariableCategory> = None;

    for def in VARIABLE_DEFINITIONS {
        if current != Some(def.category) {
            if current.is_some() {
                println!();
            }
            println!("{}", def.category.heading());
            current = Some(def.category);
        }
        println!("  {:<5} {}", def.key, def.label);
    }

    Ok(())
}
