use super::verb::Verb;

pub const BANNER: &str = "\
----------------------
 welcome to climb log
----------------------";

/// Help text listing every verb and its spellings.
#[must_use]
pub fn help_text() -> String {
    let mut lines = vec![String::from("valid commands")];
    for verb in Verb::ALL {
        for spelling in verb.spellings() {
            lines.push(format!("  > {spelling:<14}[{}]", verb.description()));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_lists_every_spelling() {
        let help = help_text();
        for verb in Verb::ALL {
            for spelling in verb.spellings() {
                assert!(help.contains(&format!("> {spelling} ")), "missing {spelling}");
            }
        }
    }
}
