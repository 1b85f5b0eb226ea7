use crate::output::{print_json, print_table};
use sfgen_core::template::TEMPLATES;

/// `sfgen templates` — list the compiled-in template set.
pub fn run(json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(&TEMPLATES[..]);
    }

    let rows = TEMPLATES
        .iter()
        .map(|t| {
            vec![
                t.name.to_string(),
                t.destination.to_string(),
                t.substitution.as_str().to_string(),
                if t.executable { "yes" } else { "no" }.to_string(),
            ]
        })
        .collect();
    print_table(&["NAME", "DESTINATION", "SUBSTITUTION", "EXECUTABLE"], rows);
    Ok(())
}
