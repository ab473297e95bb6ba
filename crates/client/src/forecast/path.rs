//! Positional path queries over a parsed document.
//!
//! Paths are written in the XPath subset the provider layout needs and translated
//! into a CSS selector that `scraper` evaluates:
//!
//! | path step        | selector               |
//! |------------------|------------------------|
//! | `//*[@id="x"]`   | `*[id="x"]`            |
//! | `/div`           | `> div`                |
//! | `//span`         | ` span`                |
//! | `div[2]`         | `div:nth-of-type(2)`   |
//! | `*[2]`           | `*:nth-child(2)`       |
//! | leading `/html`  | `html:root`            |
//!
//! A path may end in `text()`, `text()[n]` (direct text children of the selected
//! elements) or `@name` (attribute value). Those steps have no CSS form and are
//! applied to the selected elements afterwards.

use scraper::{ElementRef, Html, Selector};
use wxscrape_core::Error;

/// A parsed positional path.
#[derive(Debug, Clone)]
pub struct PositionalPath {
    css: String,
    selector: Selector,
    terminal: Option<Terminal>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Terminal {
    Text(Option<usize>),
    Attribute(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Predicate {
    Position(usize),
    AttrEquals { name: String, value: String },
}

/// A node selected by a path.
#[derive(Debug, Clone, Copy)]
pub enum Match<'a> {
    Element(ElementRef<'a>),
    Text(&'a str),
    Attribute(&'a str),
}

impl<'a> Match<'a> {
    /// Raw string value of the match.
    ///
    /// Elements yield their own text: direct text children joined, then trimmed.
    /// Text from nested elements is not included.
    pub fn value(&self) -> String {
        match self {
            Match::Element(el) => direct_text(*el).collect::<String>().trim().to_string(),
            Match::Text(text) => text.trim().to_string(),
            Match::Attribute(value) => value.trim().to_string(),
        }
    }
}

fn direct_text<'a>(el: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    el.children().filter_map(|node| node.value().as_text()).map(|text| &**text)
}

impl PositionalPath {
    /// Parse a path string.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPath` for relative paths, empty steps, unknown
    /// predicates, zero positions, positions placed after an attribute filter, or
    /// `text()`/`@attr` steps that are not last.
    pub fn parse(source: &str) -> Result<Self, Error> {
        let invalid = |reason: &str| Error::InvalidPath(format!("{source}: {reason}"));

        let mut rest = source.trim();
        if !rest.starts_with('/') {
            return Err(invalid("path must start with '/'"));
        }

        let mut css = String::new();
        let mut terminal = None;
        while !rest.is_empty() {
            if terminal.is_some() {
                return Err(invalid("text() and @attribute must be the last step"));
            }

            let (descendant, after_axis) = match rest.strip_prefix("//") {
                Some(after) => (true, after),
                None => match rest.strip_prefix('/') {
                    Some(after) => (false, after),
                    None => return Err(invalid("expected '/' between steps")),
                },
            };

            let end = step_end(after_axis).ok_or_else(|| invalid("unbalanced '[' or quote"))?;
            let (token, tail) = after_axis.split_at(end);
            let (name, predicates) = split_step(token).map_err(|reason| invalid(&reason))?;

            match name {
                "text()" => terminal = Some(Terminal::Text(text_position(&predicates).map_err(|r| invalid(&r))?)),
                n if n.starts_with('@') => {
                    if !predicates.is_empty() {
                        return Err(invalid("attribute steps take no predicates"));
                    }
                    terminal = Some(Terminal::Attribute(n[1..].to_string()));
                }
                n => {
                    let compound = compound_selector(n, &predicates).map_err(|r| invalid(&r))?;
                    match (css.is_empty(), descendant) {
                        (true, true) => css.push_str(&compound),
                        (true, false) => {
                            css.push_str(&compound);
                            css.push_str(":root");
                        }
                        (false, true) => {
                            css.push(' ');
                            css.push_str(&compound);
                        }
                        (false, false) => {
                            css.push_str(" > ");
                            css.push_str(&compound);
                        }
                    }
                }
            }
            rest = tail;
        }

        if css.is_empty() {
            return Err(invalid("path selects no elements"));
        }

        let selector = Selector::parse(&css).map_err(|_| invalid(&format!("no valid selector for {css:?}")))?;
        Ok(Self { css, selector, terminal })
    }

    /// Evaluate the path against a parsed document, in document order.
    pub fn select<'a>(&self, html: &'a Html) -> Vec<Match<'a>> {
        let elements = html.select(&self.selector);

        match &self.terminal {
            None => elements.map(Match::Element).collect(),
            Some(Terminal::Attribute(name)) => {
                elements.filter_map(|el| el.value().attr(name)).map(Match::Attribute).collect()
            }
            Some(Terminal::Text(position)) => elements
                .flat_map(|el| {
                    let texts: Vec<&'a str> = direct_text(el).collect();
                    match position {
                        Some(n) => texts.get(n - 1).copied().into_iter().collect(),
                        None => texts,
                    }
                })
                .map(Match::Text)
                .collect(),
        }
    }
}

/// Byte offset of the next step separator, honoring brackets and quotes.
fn step_end(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    for (i, c) in s.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '[') => depth += 1,
            (None, ']') => depth = depth.checked_sub(1)?,
            (None, '/') if depth == 0 => return Some(i),
            _ => {}
        }
    }
    (depth == 0 && quote.is_none()).then_some(s.len())
}

fn split_step(token: &str) -> Result<(&str, Vec<Predicate>), String> {
    let (name, mut preds) = match token.find('[') {
        Some(i) => token.split_at(i),
        None => (token, ""),
    };

    let name = name.trim();
    let valid = match name {
        "" => return Err("empty step".into()),
        "*" | "text()" => true,
        n => is_identifier(n.strip_prefix('@').unwrap_or(n)),
    };
    if !valid {
        return Err(format!("unsupported step {name:?}"));
    }

    let mut predicates = Vec::new();
    while !preds.is_empty() {
        let inner_end = preds.find(']').ok_or("unterminated predicate")?;
        predicates.push(parse_predicate(preds[1..inner_end].trim())?);
        preds = &preds[inner_end + 1..];
        if !preds.is_empty() && !preds.starts_with('[') {
            return Err(format!("unexpected {preds:?} after predicate"));
        }
    }

    Ok((name, predicates))
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn parse_predicate(inner: &str) -> Result<Predicate, String> {
    if let Ok(n) = inner.parse::<usize>() {
        return if n == 0 { Err("positions are 1-based".into()) } else { Ok(Predicate::Position(n)) };
    }

    let attr = inner.strip_prefix('@').ok_or_else(|| format!("unsupported predicate [{inner}]"))?;
    let (name, value) = attr.split_once('=').ok_or_else(|| format!("unsupported predicate [{inner}]"))?;
    let name = name.trim();
    if !is_identifier(name) {
        return Err(format!("unsupported attribute name {name:?}"));
    }

    let value = value.trim();
    let unquoted = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .ok_or_else(|| format!("attribute value must be quoted in [{inner}]"))?;

    Ok(Predicate::AttrEquals { name: name.to_string(), value: unquoted.to_string() })
}

fn text_position(predicates: &[Predicate]) -> Result<Option<usize>, String> {
    match predicates {
        [] => Ok(None),
        [Predicate::Position(n)] => Ok(Some(*n)),
        _ => Err("text() takes at most one position".into()),
    }
}

/// CSS compound selector for one element step.
///
/// XPath positions count siblings that pass the name test, which is exactly
/// `:nth-of-type` for a tag and `:nth-child` for `*`. A position after an attribute
/// filter counts only the filtered siblings and has no CSS equivalent.
fn compound_selector(name: &str, predicates: &[Predicate]) -> Result<String, String> {
    let mut out = name.to_ascii_lowercase();
    let mut filtered = false;
    let mut positioned = false;

    for predicate in predicates {
        match predicate {
            Predicate::Position(n) => {
                if filtered {
                    return Err("position after an attribute filter is not supported".into());
                }
                if positioned {
                    return Err("one position per step".into());
                }
                positioned = true;
                let pseudo = if name == "*" { "nth-child" } else { "nth-of-type" };
                out.push_str(&format!(":{pseudo}({n})"));
            }
            Predicate::AttrEquals { name, value } => {
                filtered = true;
                let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
                out.push_str(&format!("[{name}=\"{escaped}\"]"));
            }
        }
    }

    Ok(out)
}
