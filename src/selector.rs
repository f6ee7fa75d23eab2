use super::*;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Combinator {
    Descendant,
    Child,
    AdjacentSibling,
    GeneralSibling,
    // Any other caller-supplied token, rendered verbatim.
    Other(String),
}

impl Combinator {
    /// Recognizes only the four CSS combinator tokens.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            " " => Some(Self::Descendant),
            ">" => Some(Self::Child),
            "+" => Some(Self::AdjacentSibling),
            "~" => Some(Self::GeneralSibling),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::AdjacentSibling => "+",
            Self::GeneralSibling => "~",
            Self::Other(token) => token,
        }
    }

    pub fn is_standard(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for Combinator {
    fn from(token: &str) -> Self {
        Self::from_token(token).unwrap_or_else(|| Self::Other(token.to_string()))
    }
}

impl From<String> for Combinator {
    fn from(token: String) -> Self {
        Self::from_token(&token).unwrap_or(Self::Other(token))
    }
}

impl From<char> for Combinator {
    fn from(token: char) -> Self {
        let mut buf = [0u8; 4];
        Self::from(&*token.encode_utf8(&mut buf))
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectorFragment {
    pub category: Category,
    pub text: String,
}

/// One selector sequence such as `a#nav.item[href]:hover::after`.
///
/// Values are never mutated after construction: every extension method
/// borrows `self` and returns a fresh `Selector`, so a base can be branched
/// freely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Selector {
    fragments: Vec<SelectorFragment>,
    // Highest category used so far.
    cursor: Option<Category>,
}

impl Selector {
    pub(crate) fn start(category: Category, value: &str) -> Self {
        log::trace!("selector: start with {category} {value:?}");
        Self {
            fragments: vec![SelectorFragment {
                category,
                text: category.render(value),
            }],
            cursor: Some(category),
        }
    }

    fn extend(&self, category: Category, value: &str) -> Result<Self> {
        if let Some(after) = self.cursor.filter(|after| category < *after) {
            log::debug!("selector: rejected {category} after {after} in {self:?}");
            return Err(Error::OrderViolation { category, after });
        }
        if category.is_unique() && self.contains(category) {
            log::debug!("selector: rejected second {category} in {self:?}");
            return Err(Error::DuplicateViolation { category });
        }

        let mut fragments = Vec::with_capacity(self.fragments.len() + 1);
        fragments.extend_from_slice(&self.fragments);
        fragments.push(SelectorFragment {
            category,
            text: category.render(value),
        });
        log::trace!("selector: appended {category} {value:?}");
        Ok(Self {
            fragments,
            cursor: Some(category),
        })
    }

    pub fn element(&self, value: &str) -> Result<Self> {
        self.extend(Category::Element, value)
    }

    pub fn id(&self, value: &str) -> Result<Self> {
        self.extend(Category::Id, value)
    }

    pub fn class(&self, value: &str) -> Result<Self> {
        self.extend(Category::Class, value)
    }

    pub fn attr(&self, value: &str) -> Result<Self> {
        self.extend(Category::Attribute, value)
    }

    pub fn pseudo_class(&self, value: &str) -> Result<Self> {
        self.extend(Category::PseudoClass, value)
    }

    pub fn pseudo_element(&self, value: &str) -> Result<Self> {
        self.extend(Category::PseudoElement, value)
    }

    pub fn fragments(&self) -> &[SelectorFragment] {
        &self.fragments
    }

    pub fn cursor(&self) -> Option<Category> {
        self.cursor
    }

    pub fn contains(&self, category: Category) -> bool {
        self.fragments.iter().any(|f| f.category == category)
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn stringify(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            f.write_str(&fragment.text)?;
        }
        Ok(())
    }
}

/// Either side of a combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SelectorNode {
    Simple(Selector),
    Compound(CompoundSelector),
}

impl SelectorNode {
    pub fn stringify(&self) -> String {
        match self {
            Self::Simple(selector) => selector.stringify(),
            Self::Compound(compound) => compound.stringify(),
        }
    }
}

impl fmt::Display for SelectorNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple(selector) => fmt::Display::fmt(selector, f),
            Self::Compound(compound) => fmt::Display::fmt(compound, f),
        }
    }
}

impl From<Selector> for SelectorNode {
    fn from(selector: Selector) -> Self {
        Self::Simple(selector)
    }
}

impl From<&Selector> for SelectorNode {
    fn from(selector: &Selector) -> Self {
        Self::Simple(selector.clone())
    }
}

impl From<CompoundSelector> for SelectorNode {
    fn from(compound: CompoundSelector) -> Self {
        Self::Compound(compound)
    }
}

impl From<&CompoundSelector> for SelectorNode {
    fn from(compound: &CompoundSelector) -> Self {
        Self::Compound(compound.clone())
    }
}

/// Two selectors joined by a combinator, rendered as `left combinator right`
/// with a single space on each side of the token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompoundSelector {
    left: Box<SelectorNode>,
    combinator: Combinator,
    right: Box<SelectorNode>,
}

impl CompoundSelector {
    pub(crate) fn new(left: SelectorNode, combinator: Combinator, right: SelectorNode) -> Self {
        log::trace!("selector: combine with {:?}", combinator.as_str());
        Self {
            left: Box::new(left),
            combinator,
            right: Box::new(right),
        }
    }

    pub fn left(&self) -> &SelectorNode {
        &self.left
    }

    pub fn combinator(&self) -> &Combinator {
        &self.combinator
    }

    pub fn right(&self) -> &SelectorNode {
        &self.right
    }

    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.combinator, self.right)
    }
}

pub fn element(value: &str) -> Selector {
    Selector::start(Category::Element, value)
}

pub fn id(value: &str) -> Selector {
    Selector::start(Category::Id, value)
}

pub fn class(value: &str) -> Selector {
    Selector::start(Category::Class, value)
}

pub fn attr(value: &str) -> Selector {
    Selector::start(Category::Attribute, value)
}

pub fn pseudo_class(value: &str) -> Selector {
    Selector::start(Category::PseudoClass, value)
}

pub fn pseudo_element(value: &str) -> Selector {
    Selector::start(Category::PseudoElement, value)
}

/// Joins two selectors. Any token is accepted.
pub fn combine(
    left: impl Into<SelectorNode>,
    combinator: impl Into<Combinator>,
    right: impl Into<SelectorNode>,
) -> CompoundSelector {
    CompoundSelector::new(left.into(), combinator.into(), right.into())
}
