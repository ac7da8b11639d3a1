use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The kind of a documented symbol, as written in a symbol graph.
///
/// Every variant except [`KindIdentifier::Unknown`] has exactly one canonical short
/// name (see [`KindIdentifier::identifier`]). Identifiers that match no canonical name
/// resolve to `Unknown`, which keeps the original text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KindIdentifier {
    /// An associated type requirement of a protocol.
    AssociatedType,
    Class,
    /// A deinitializer.
    Deinit,
    Enum,
    /// A case of an enumeration.
    Case,
    /// A free function.
    Func,
    /// An operator declaration.
    Operator,
    /// An initializer.
    Init,
    /// An instance variable.
    Ivar,
    Macro,
    /// An instance method.
    Method,
    /// An instance property.
    Property,
    Protocol,
    /// A standalone code snippet.
    Snippet,
    /// A group of code snippets.
    SnippetGroup,
    Struct,
    /// An instance subscript.
    Subscript,
    /// A type (static or class) method.
    TypeMethod,
    /// A type (static or class) property.
    TypeProperty,
    /// A type (static or class) subscript.
    TypeSubscript,
    TypeAlias,
    /// A global variable.
    Var,
    Module,
    /// An extension of a type declared elsewhere.
    Extension,
    /// A data dictionary (e.g. a JSON object schema).
    Dictionary,
    /// A key within a data dictionary.
    DictionaryKey,
    /// An HTTP endpoint.
    HttpRequest,
    /// A parameter of an HTTP request.
    HttpParameter,
    /// A response of an HTTP request.
    HttpResponse,
    /// The body of an HTTP request.
    HttpBody,
    Namespace,
    /// An identifier that matched no canonical kind. Holds the input verbatim.
    Unknown(String),
}

impl KindIdentifier {
    /// Canonical short names of every known kind, in declaration order.
    pub const CANONICAL_NAMES: &'static [&'static str] = &[
        "associatedtype",
        "class",
        "deinit",
        "enum",
        "enum.case",
        "func",
        "func.op",
        "init",
        "ivar",
        "macro",
        "method",
        "property",
        "protocol",
        "snippet",
        "snippetGroup",
        "struct",
        "subscript",
        "type.method",
        "type.property",
        "type.subscript",
        "typealias",
        "var",
        "module",
        "extension",
        "dictionary",
        "dictionaryKey",
        "httpRequest",
        "httpParameter",
        "httpResponse",
        "httpBody",
        "namespace",
    ];

    /// Resolve `identifier` into a kind.
    ///
    /// A canonical short name resolves directly. Otherwise everything up to and
    /// including the first `.` is treated as a language prefix and dropped, and the
    /// remainder is looked up. The prefix itself is never inspected. Lookup is
    /// case-sensitive; anything that still does not match becomes
    /// [`KindIdentifier::Unknown`] holding `identifier` unchanged.
    ///
    /// ```
    /// use symbol_kind::KindIdentifier;
    ///
    /// assert_eq!(KindIdentifier::parse("swift.func"), KindIdentifier::Func);
    /// assert_eq!(KindIdentifier::parse("func"), KindIdentifier::Func);
    /// assert!(KindIdentifier::parse("swift").is_unknown());
    /// ```
    pub fn parse(identifier: &str) -> Self {
        Self::resolve(identifier).unwrap_or_else(|| Self::Unknown(identifier.to_owned()))
    }

    /// Returns true if `identifier` resolves to a known kind under the rules of
    /// [`KindIdentifier::parse`].
    pub fn is_known(identifier: &str) -> bool {
        Self::resolve(identifier).is_some()
    }

    /// The canonical short name of this kind.
    ///
    /// For [`KindIdentifier::Unknown`] this is the raw text the kind was parsed from,
    /// so re-parsing the result always yields an equal value.
    pub fn identifier(&self) -> &str {
        match self {
            KindIdentifier::AssociatedType => "associatedtype",
            KindIdentifier::Class => "class",
            KindIdentifier::Deinit => "deinit",
            KindIdentifier::Enum => "enum",
            KindIdentifier::Case => "enum.case",
            KindIdentifier::Func => "func",
            KindIdentifier::Operator => "func.op",
            KindIdentifier::Init => "init",
            KindIdentifier::Ivar => "ivar",
            KindIdentifier::Macro => "macro",
            KindIdentifier::Method => "method",
            KindIdentifier::Property => "property",
            KindIdentifier::Protocol => "protocol",
            KindIdentifier::Snippet => "snippet",
            KindIdentifier::SnippetGroup => "snippetGroup",
            KindIdentifier::Struct => "struct",
            KindIdentifier::Subscript => "subscript",
            KindIdentifier::TypeMethod => "type.method",
            KindIdentifier::TypeProperty => "type.property",
            KindIdentifier::TypeSubscript => "type.subscript",
            KindIdentifier::TypeAlias => "typealias",
            KindIdentifier::Var => "var",
            KindIdentifier::Module => "module",
            KindIdentifier::Extension => "extension",
            KindIdentifier::Dictionary => "dictionary",
            KindIdentifier::DictionaryKey => "dictionaryKey",
            KindIdentifier::HttpRequest => "httpRequest",
            KindIdentifier::HttpParameter => "httpParameter",
            KindIdentifier::HttpResponse => "httpResponse",
            KindIdentifier::HttpBody => "httpBody",
            KindIdentifier::Namespace => "namespace",
            KindIdentifier::Unknown(raw) => raw,
        }
    }

    /// Returns true for [`KindIdentifier::Unknown`].
    pub fn is_unknown(&self) -> bool {
        matches!(self, KindIdentifier::Unknown(_))
    }

    /// Iterate over every known kind, in the order of [`KindIdentifier::CANONICAL_NAMES`].
    pub fn known() -> impl Iterator<Item = KindIdentifier> {
        Self::CANONICAL_NAMES
            .iter()
            .filter_map(|name| Self::lookup(name))
    }

    fn resolve(identifier: &str) -> Option<Self> {
        Self::lookup(identifier).or_else(|| {
            let (_language, kind) = identifier.split_once('.')?;
            Self::lookup(kind)
        })
    }

    /// Exact, case-sensitive lookup of a canonical short name.
    fn lookup(name: &str) -> Option<Self> {
        let kind = match name {
            "associatedtype" => KindIdentifier::AssociatedType,
            "class" => KindIdentifier::Class,
            "deinit" => KindIdentifier::Deinit,
            "enum" => KindIdentifier::Enum,
            "enum.case" => KindIdentifier::Case,
            "func" => KindIdentifier::Func,
            "func.op" => KindIdentifier::Operator,
            "init" => KindIdentifier::Init,
            "ivar" => KindIdentifier::Ivar,
            "macro" => KindIdentifier::Macro,
            "method" => KindIdentifier::Method,
            "property" => KindIdentifier::Property,
            "protocol" => KindIdentifier::Protocol,
            "snippet" => KindIdentifier::Snippet,
            "snippetGroup" => KindIdentifier::SnippetGroup,
            "struct" => KindIdentifier::Struct,
            "subscript" => KindIdentifier::Subscript,
            "type.method" => KindIdentifier::TypeMethod,
            "type.property" => KindIdentifier::TypeProperty,
            "type.subscript" => KindIdentifier::TypeSubscript,
            "typealias" => KindIdentifier::TypeAlias,
            "var" => KindIdentifier::Var,
            "module" => KindIdentifier::Module,
            "extension" => KindIdentifier::Extension,
            "dictionary" => KindIdentifier::Dictionary,
            "dictionaryKey" => KindIdentifier::DictionaryKey,
            "httpRequest" => KindIdentifier::HttpRequest,
            "httpParameter" => KindIdentifier::HttpParameter,
            "httpResponse" => KindIdentifier::HttpResponse,
            "httpBody" => KindIdentifier::HttpBody,
            "namespace" => KindIdentifier::Namespace,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for KindIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for KindIdentifier {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for KindIdentifier {
    fn from(identifier: &str) -> Self {
        Self::parse(identifier)
    }
}

impl From<String> for KindIdentifier {
    fn from(identifier: String) -> Self {
        // Reuse the allocation when the identifier turns out to be unknown.
        match Self::resolve(&identifier) {
            Some(kind) => kind,
            None => Self::Unknown(identifier),
        }
    }
}
