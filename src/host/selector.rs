use super::HostNode;

/// Why a selector string could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectorError {
    Empty,
    UnexpectedChar { ch: char, pos: usize },
    Unsupported { what: &'static str, pos: usize },
}

impl std::fmt::Display for SelectorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty selector"),
            Self::UnexpectedChar { ch, pos } => {
                write!(f, "unexpected character {ch:?} at offset {pos}")
            }
            Self::Unsupported { what, pos } => {
                write!(f, "unsupported selector syntax ({what}) at offset {pos}")
            }
        }
    }
}

impl std::error::Error for SelectorError {}

/// One compound selector: `tag#id.class.class`, every part optional but at least one present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    element_id: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    fn matches(&self, node: &HostNode) -> bool {
        self.tag
            .as_deref()
            .is_none_or(|tag| node.tag().eq_ignore_ascii_case(tag))
            && self
                .element_id
                .as_deref()
                .is_none_or(|id| node.element_id() == Some(id))
            && self.classes.iter().all(|class| node.has_class(class))
    }
}

/// A parsed selector list (`a, b`), supporting the subset of CSS needed to name hosts:
/// `*`, `tag`, `#id`, `.class` and their compounds.
///
/// Combinators, attribute selectors and pseudo classes are rejected rather than ignored, so a
/// selector never silently matches more than it says.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    alternatives: Vec<Compound>,
}

impl Selector {
    pub fn parse(source: &str) -> Result<Self, SelectorError> {
        let mut alternatives = Vec::new();
        let mut offset = 0;
        for part in source.split(',') {
            alternatives.push(parse_compound(part, offset)?);
            offset += part.len() + 1;
        }
        Ok(Self { alternatives })
    }

    pub fn matches(&self, node: &HostNode) -> bool {
        self.alternatives.iter().any(|c| c.matches(node))
    }
}

impl std::str::FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn is_ident_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '-' || ch == '_'
}

fn parse_compound(part: &str, offset: usize) -> Result<Compound, SelectorError> {
    let trimmed_start = part.len() - part.trim_start().len();
    let text = part.trim();
    if text.is_empty() {
        return Err(SelectorError::Empty);
    }
    let base = offset + trimmed_start;

    let mut compound = Compound::default();
    let mut saw_universal = false;
    let mut chars = text.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        let at = base + pos;
        match ch {
            '*' if pos == 0 => saw_universal = true,
            '#' | '.' => {
                let start = pos + ch.len_utf8();
                let mut end = start;
                while let Some(&(i, c)) = chars.peek() {
                    if !is_ident_char(c) {
                        break;
                    }
                    end = i + c.len_utf8();
                    chars.next();
                }
                if end == start {
                    return Err(SelectorError::UnexpectedChar { ch, pos: at });
                }
                let ident = text[start..end].to_owned();
                if ch == '#' {
                    if compound.element_id.is_some() {
                        return Err(SelectorError::Unsupported {
                            what: "multiple ids",
                            pos: at,
                        });
                    }
                    compound.element_id = Some(ident);
                } else {
                    compound.classes.push(ident);
                }
            }
            c if is_ident_char(c) && pos == 0 => {
                let mut end = c.len_utf8();
                while let Some(&(i, c)) = chars.peek() {
                    if !is_ident_char(c) {
                        break;
                    }
                    end = i + c.len_utf8();
                    chars.next();
                }
                compound.tag = Some(text[..end].to_owned());
            }
            c if c.is_whitespace() || matches!(c, '>' | '+' | '~') => {
                return Err(SelectorError::Unsupported {
                    what: "combinator",
                    pos: at,
                });
            }
            '[' => {
                return Err(SelectorError::Unsupported {
                    what: "attribute selector",
                    pos: at,
                });
            }
            ':' => {
                return Err(SelectorError::Unsupported {
                    what: "pseudo class",
                    pos: at,
                });
            }
            _ => return Err(SelectorError::UnexpectedChar { ch, pos: at }),
        }
    }

    if !saw_universal && compound == Compound::default() {
        return Err(SelectorError::Empty);
    }
    Ok(compound)
}
