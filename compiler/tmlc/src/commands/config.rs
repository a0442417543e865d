//! The `config` command: print the effective configuration.

use std::io::Write;

use tml_parse::Config;

use super::EXIT_OK;

pub fn show_config(config: &Config, out: &mut dyn Write) -> i32 {
    let (min, max) = config.rpe_range;
    let _ = writeln!(out, "default unit: {}", config.default_unit);
    let _ = writeln!(out, "valid units:  {}", config.sorted_units().join(", "));
    let _ = writeln!(out, "RPE range:    {min} to {max}");
    if !config.is_valid_unit(&config.default_unit) {
        let _ = writeln!(
            out,
            "warning: the default unit is not a valid unit; rows without a unit will be rejected"
        );
    }
    EXIT_OK
}
