use glint::{default_keywords, Category, Keywords, Scanner};
use lliw::Fg;

pub static CODE: &str = r#"/* Greets the world */
function greet(name) {
    const re = /^\w+$/g; // only words
    if (re.test(name)) return "Hello, " + name + '!';
    # not really javascript
    return (1 + 2) / 3;
}
"#;

fn main() {
    for token in Scanner::new(CODE) {
        // Words only stand out when they are keywords
        let keyword = token.category == Category::Word
            && default_keywords().is_keyword(&token.text);
        match colour(token.category, keyword) {
            Some(fg) => print!("{fg}{}{}", token.text, Fg::Reset),
            None => print!("{}", token.text),
        }
    }
    println!();
}

fn colour(category: Category, keyword: bool) -> Option<Fg> {
    match category {
        Category::Plain => None,
        Category::Word => keyword.then_some(Fg::Yellow),
        Category::Operator | Category::ClosingBrace => Some(Fg::LightBlack),
        Category::Regex => Some(Fg::Purple),
        Category::DoubleQuoted | Category::SingleQuoted => Some(Fg::Green),
        _ => Some(Fg::Blue),
    }
}
