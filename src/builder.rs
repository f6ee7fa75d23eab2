use super::*;

/// How `SelectorBuilder::combine` treats combinator tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CombinatorPolicy {
    /// Any token is interpolated as given.
    #[default]
    Permissive,
    /// Only ` `, `>`, `+` and `~` are accepted.
    Strict,
}

/// Entry point for building selectors.
///
/// ```
/// use selector_builder::SelectorBuilder;
///
/// let builder = SelectorBuilder::new();
/// let selector = builder.id("main").class("container")?.class("editable")?;
/// assert_eq!(selector.stringify(), "#main.container.editable");
/// # Ok::<(), selector_builder::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    policy: CombinatorPolicy,
}

impl SelectorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self::with_policy(CombinatorPolicy::Strict)
    }

    pub fn with_policy(policy: CombinatorPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> CombinatorPolicy {
        self.policy
    }

    pub fn element(&self, value: &str) -> Selector {
        selector::element(value)
    }

    pub fn id(&self, value: &str) -> Selector {
        selector::id(value)
    }

    pub fn class(&self, value: &str) -> Selector {
        selector::class(value)
    }

    pub fn attr(&self, value: &str) -> Selector {
        selector::attr(value)
    }

    pub fn pseudo_class(&self, value: &str) -> Selector {
        selector::pseudo_class(value)
    }

    pub fn pseudo_element(&self, value: &str) -> Selector {
        selector::pseudo_element(value)
    }

    pub fn combine(
        &self,
        left: impl Into<SelectorNode>,
        combinator: &str,
        right: impl Into<SelectorNode>,
    ) -> Result<CompoundSelector> {
        let combinator = match self.policy {
            CombinatorPolicy::Permissive => Combinator::from(combinator),
            CombinatorPolicy::Strict => match Combinator::from_token(combinator) {
                Some(combinator) => combinator,
                None => {
                    log::debug!("builder: rejected combinator {combinator:?}");
                    return Err(Error::UnknownCombinator(combinator.to_string()));
                }
            },
        };
        Ok(CompoundSelector::new(left.into(), combinator, right.into()))
    }
}
