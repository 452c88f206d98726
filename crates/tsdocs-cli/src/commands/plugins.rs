//! `tsdocs plugins`: prints the plugin modules and the plugins they export.

use crate::commands::plugin_catalog;
use crate::error::Result;

pub fn execute() -> Result<()> {
    for line in plugin_lines() {
        println!("{line}");
    }
    Ok(())
}

/// One line per module: `name: plugin, plugin`.
pub fn plugin_lines() -> Vec<String> {
    let catalog = plugin_catalog();
    catalog
        .names()
        .into_iter()
        .filter_map(|name| catalog.get(name))
        .map(|module| {
            let exports: Vec<String> = (module.exports)()
                .iter()
                .map(|plugin| plugin.name().to_string())
                .collect();
            format!("{}: {}", module.name, exports.join(", "))
        })
        .collect()
}
