//! Keyword lookup.
//!
//! Words are looked up by exact, case-sensitive match. The shipped set is a superset of the
//! reserved words of many popular languages (C, C#, C++, Go, Java, JavaScript, Kotlin, PHP,
//! Python, Ruby, Rust, Swift and friends), so no language needs to be selected up front.

use crate::error::Error;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// The shipped keyword set, compressed into a single anchored expression
const DEFAULT_PATTERN: &str = concat!(
    r"^(a(bstract|lias|nd|rguments|rray|s(m|sert)?|uto)",
    r"|b(ase|egin|ool(ean)?|reak|yte)",
    r"|c(ase|atch|har|hecked|lass|lone|ompl|onst|ontinue)",
    r"|de(bugger|cimal|clare|f(ault|er)?|init|l(egate|ete)?)",
    r"|do|double",
    r"|e(cho|ls?if|lse(if)?|nd|nsure|num|vent|x(cept|ec|p(licit|ort)|te(nds|nsion|rn)))",
    r"|f(allthrough|alse|inal(ly)?|ixed|loat|or(each)?|riend|rom|unc(tion)?)",
    r"|global|goto|guard",
    r"|i(f|mp(lements|licit|ort)|n(it|clude(_once)?|line|out|stanceof|t(erface|ernal)?)?|s)",
    r"|l(ambda|et|ock|ong)",
    r"|m(icrolight|odule|utable)",
    r"|NaN",
    r"|n(amespace|ative|ext|ew|il|ot|ull)",
    r"|o(bject|perator|r|ut|verride)",
    r"|p(ackage|arams|rivate|rotected|rotocol|ublic)",
    r"|r(aise|e(adonly|do|f|gister|peat|quire(_once)?|scue|strict|try|turn))",
    r"|s(byte|ealed|elf|hort|igned|izeof|tatic|tring|truct|ubscript|uper|ynchronized|witch)",
    r"|t(emplate|hen|his|hrows?|ransient|rue|ry|ype(alias|def|id|name|of))",
    r"|u(n(checked|def(ined)?|ion|less|signed|til)|se|sing)",
    r"|v(ar|irtual|oid|olatile)",
    r"|w(char_t|hen|here|hile|ith)",
    r"|xor|yield)$",
);

/// Anything that can tell a keyword apart from an ordinary word
pub trait Keywords {
    fn is_keyword(&self, word: &str) -> bool;
}

/// A regex decides on its own terms, so it should be anchored with `^` and `$`
impl Keywords for Regex {
    fn is_keyword(&self, word: &str) -> bool {
        self.is_match(word)
    }
}

impl Keywords for HashSet<String> {
    fn is_keyword(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl Keywords for HashSet<&str> {
    fn is_keyword(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl Keywords for [&str] {
    fn is_keyword(&self, word: &str) -> bool {
        self.iter().any(|k| *k == word)
    }
}

impl Keywords for Vec<&str> {
    fn is_keyword(&self, word: &str) -> bool {
        self.as_slice().is_keyword(word)
    }
}

impl<K: Keywords + ?Sized> Keywords for &K {
    fn is_keyword(&self, word: &str) -> bool {
        (**self).is_keyword(word)
    }
}

/// Obtain the shipped multi-language keyword set
pub fn default_keywords() -> &'static Regex {
    static KEYWORDS: OnceLock<Regex> = OnceLock::new();
    KEYWORDS.get_or_init(|| Regex::new(DEFAULT_PATTERN).expect("Invalid keyword regex!"))
}

/// Build a keyword set from a list of words, matched literally
pub fn from_words(words: &[&str]) -> Result<Regex, Error> {
    let alternation = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    from_pattern(&format!("^(?:{alternation})$"))
}

/// Build a keyword set from a regular expression
pub fn from_pattern(pattern: &str) -> Result<Regex, Error> {
    Ok(Regex::new(pattern)?)
}
