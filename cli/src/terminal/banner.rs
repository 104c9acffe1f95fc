use colored::*;

use crate::terminal::{colors, print};

const BANNER: &str = r#"
      ___  ___  ___ _____ ___  ___ ___ ___ _____
     | _ \/ _ \| _ \_   _|   \| _ \_ _| __|_   _|
     |  _/ (_) |   / | | | |) |   /| || _|  | |
     |_|  \___/|_|_\ |_| |___/|_|_\___|_|   |_|
"#;

pub fn print() {
    print::line(&BANNER.color(colors::PRIMARY).bold().to_string());
}
