use lazy_regex::{Regex, regex};

/// Small words kept lowercase unless they start the show name
const LOWERCASE_WORDS: [&str; 16] = [
    "A", "As", "At", "By", "In", "Of", "On", "Or", "To", "Vs", "VS", "And", "For", "The", "From",
    "With",
];

/// Convert a captured show name into title case.
///
/// `_` and `.` act as word separators, bracketed text is fully uppercased
/// (`the.office.(us)` becomes `The Office (US)`) and short joining words
/// are lowercased after the first word. Names containing dots such as
/// `the o.c.` lose them (`The O C`).
pub fn convert(show: &str) -> String {
    let separators: &Regex = regex!(r"[_.]+");
    let spaced = separators.replace_all(show, " ");

    let mut titled = String::with_capacity(spaced.len());
    let mut next_upper = true;
    let mut force_upper = false;
    for c in spaced.chars() {
        if c.is_whitespace() || c == '-' {
            next_upper = true;
            titled.push(c);
        } else if c == '(' {
            force_upper = true;
            titled.push(c);
        } else if c == ')' {
            force_upper = false;
            titled.push(c);
        } else if next_upper || force_upper {
            titled.extend(c.to_uppercase());
            next_upper = false;
        } else {
            titled.push(c);
        }
    }

    fix_word_case(&titled)
}

fn fix_word_case(show: &str) -> String {
    let spaces: &Regex = regex!(r" +");
    let mut words: Vec<String> = spaces.split(show).map(str::to_string).collect();
    while words.last().is_some_and(String::is_empty) {
        words.pop();
    }

    for word in words.iter_mut().skip(1) {
        if LOWERCASE_WORDS.contains(&word.as_str()) {
            *word = word.to_lowercase();
        }
    }

    words.join(" ")
}
