use crate::api::{AnonymousParsable, AnonymousValue};

pub(crate) enum Kind {
    Flag,
    Value {
        value_help: String,
        parser: Box<dyn AnonymousParsable>,
    },
}

/// A descriptor, as owned by the registry once its type T has been erased.
pub(crate) struct Entry {
    forms: Vec<String>,
    help: String,
    optional: bool,
    kind: Kind,
}

impl Entry {
    pub(crate) fn new(forms: Vec<String>, help: String, optional: bool, kind: Kind) -> Self {
        debug_assert!(!forms.is_empty(), "internal error - an entry must have forms");
        Self {
            forms,
            help,
            optional,
            kind,
        }
    }

    pub(crate) fn forms(&self) -> &[String] {
        &self.forms
    }

    /// The first form, used to name the entry in messages.
    pub(crate) fn primary_form(&self) -> &str {
        &self.forms[0]
    }

    pub(crate) fn help(&self) -> &str {
        &self.help
    }

    pub(crate) fn is_optional(&self) -> bool {
        self.optional
    }

    pub(crate) fn kind(&self) -> &Kind {
        &self.kind
    }

    pub(crate) fn value_help(&self) -> Option<&str> {
        match &self.kind {
            Kind::Flag => None,
            Kind::Value { value_help, .. } => Some(value_help),
        }
    }

    /// Whether `token` is, precisely, one of the forms.
    pub(crate) fn matches(&self, token: &str) -> bool {
        self.forms.iter().any(|form| form == token)
    }
}

impl std::fmt::Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match &self.kind {
            Kind::Flag => "Flag".to_string(),
            Kind::Value { value_help, .. } => format!("Value {value_help}"),
        };
        let optional = if self.optional { "optional" } else { "required" };

        write!(f, "{kind}[{}, {optional}]", self.forms.join(", "))
    }
}

/// A single matched occurrence of an entry.
pub(crate) struct Match {
    pub index: usize,
    pub value: Option<AnonymousValue>,
}

impl Match {
    pub(crate) fn flag(index: usize) -> Self {
        Self { index, value: None }
    }

    pub(crate) fn value(index: usize, value: AnonymousValue) -> Self {
        Self {
            index,
            value: Some(value),
        }
    }
}

impl std::fmt::Debug for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Match")
            .field("index", &self.index)
            .field("has_value", &self.value.is_some())
            .finish()
    }
}
