//! Name bindings keyed by normalized identifier.
//!
//! A [`Namespace`] plays the part of a class body or module dictionary:
//! an insertion-ordered map from interned normalized names to values. Every
//! key went through NFKC, so a lookup by any compatibility-equivalent
//! spelling finds the same binding once the spelling is normalized with
//! [`Namespace::resolve`].

use indexmap::IndexMap;
use sablec_util::Symbol;

use crate::normalize::normalize_str;
use crate::token::{Spanned, Token};

/// Insertion-ordered bindings from normalized names to values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Namespace<V> {
    bindings: IndexMap<Symbol, V>,
}

impl<V> Namespace<V> {
    /// Creates an empty namespace.
    pub fn new() -> Self {
        Self {
            bindings: IndexMap::new(),
        }
    }

    /// Binds `name` to `value`, returning the previous value.
    ///
    /// Rebinding keeps the name's original position.
    pub fn bind(&mut self, name: Symbol, value: V) -> Option<V> {
        self.bindings.insert(name, value)
    }

    /// Looks up an already-normalized name.
    ///
    /// `name` is compared exactly; use [`Namespace::resolve`] for raw
    /// spellings.
    pub fn get(&self, name: &str) -> Option<&V> {
        Symbol::lookup(name).and_then(|sym| self.bindings.get(&sym))
    }

    /// Looks up a binding by symbol.
    pub fn get_symbol(&self, name: Symbol) -> Option<&V> {
        self.bindings.get(&name)
    }

    /// Returns true if the already-normalized `name` is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Normalizes `spelling` and looks it up.
    ///
    /// ```
    /// use sablec_lex::namespace::Namespace;
    /// use sablec_util::Symbol;
    ///
    /// let mut ns = Namespace::new();
    /// ns.bind(Symbol::intern("μ"), 5);
    /// assert_eq!(ns.resolve("µ"), Some(&5));
    /// assert_eq!(ns.get("µ"), None);
    /// ```
    pub fn resolve(&self, spelling: &str) -> Option<&V> {
        self.get(&normalize_str(spelling))
    }

    /// Bound names in binding order.
    pub fn names(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.bindings.keys().copied()
    }

    /// Bindings in binding order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &V)> + '_ {
        self.bindings.iter().map(|(name, value)| (*name, value))
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<V> Default for Namespace<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<(Symbol, V)> for Namespace<V> {
    fn from_iter<I: IntoIterator<Item = (Symbol, V)>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }
}

/// Binds every `name = number` line of a token stream.
///
/// Lines of any other shape are ignored.
///
/// ```
/// use sablec_lex::namespace::bind_assignments;
/// use sablec_lex::tokenize::{tokenize, RecoveryPolicy};
/// use sablec_util::{Handler, SourceFile};
///
/// let file = SourceFile::new(0, "body.sb", "ä = 1\nµ = 2\nprint(ä)\n");
/// let tokens = tokenize(&file, &Handler::new(), RecoveryPolicy::Abort).unwrap();
/// let ns = bind_assignments(&tokens);
///
/// assert_eq!(ns.len(), 2);
/// assert_eq!(ns.get("μ"), Some(&2));
/// ```
pub fn bind_assignments(tokens: &[Spanned]) -> Namespace<u64> {
    let mut namespace = Namespace::new();

    let lines = tokens.split(|t| matches!(t.token, Token::Newline | Token::Eof));
    for line in lines {
        if let [name, eq, value] = line {
            if let (Token::Ident(ident), Token::Eq, Token::Number(n)) =
                (name.token, eq.token, value.token)
            {
                namespace.bind(ident.name, n);
            }
        }
    }

    namespace
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::{tokenize, RecoveryPolicy};
    use sablec_util::{Handler, SourceFile};

    fn bind_source(source: &str) -> Namespace<u64> {
        let file = SourceFile::new(0, "ns.sb", source);
        let tokens = tokenize(&file, &Handler::new(), RecoveryPolicy::Abort).unwrap();
        bind_assignments(&tokens)
    }

    #[test]
    fn test_class_body_bindings() {
        let ns = bind_source(
            "ä = 1\nµ = 2 # this is a compatibility character\n蟒 = 3\nx\u{E0100} = 4\n",
        );
        assert_eq!(ns.get("ä"), Some(&1));
        assert_eq!(ns.get("\u{03BC}"), Some(&2));
        assert_eq!(ns.get("蟒"), Some(&3));
        assert_eq!(ns.get("x\u{E0100}"), Some(&4));
        assert!(!ns.contains("x"));

        let names: Vec<&str> = ns.names().map(|s| s.as_str()).collect();
        assert_eq!(names, vec!["ä", "μ", "蟒", "x\u{E0100}"]);
    }

    #[test]
    fn test_fraktur_binding() {
        let ns = bind_source("\u{1D518}\u{1D52B}\u{1D526}\u{1D520}\u{1D52C}\u{1D521}\u{1D522} = 1");
        assert_eq!(ns.get("Unicode"), Some(&1));
        assert!(ns.contains("Unicode"));
    }

    #[test]
    fn test_rebinding_keeps_position() {
        let mut ns = Namespace::new();
        ns.bind(Symbol::intern("a"), 1);
        ns.bind(Symbol::intern("b"), 2);
        assert_eq!(ns.bind(Symbol::intern("a"), 3), Some(1));
        let bound: Vec<(&str, u64)> = ns.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        assert_eq!(bound, vec![("a", 3), ("b", 2)]);
    }

    #[test]
    fn test_equivalent_spellings_share_binding() {
        let ns = bind_source("µ = 1\nμ = 2\n");
        assert_eq!(ns.len(), 1);
        assert_eq!(ns.resolve("µ"), Some(&2));
        assert_eq!(ns.resolve("μ"), Some(&2));
    }

    #[test]
    fn test_other_lines_ignored() {
        let ns = bind_source("a = 1 + 2\n(b) = 3\nc = d\n= 4\ne = 5");
        assert_eq!(ns.len(), 1);
        assert_eq!(ns.get("e"), Some(&5));
    }

    #[test]
    fn test_unknown_name() {
        let ns: Namespace<u64> = Namespace::default();
        assert!(ns.is_empty());
        assert_eq!(ns.get("never_interned_name_q9z"), None);
        assert_eq!(ns.resolve("ﬁ"), None);
    }

    #[test]
    fn test_from_iterator() {
        let ns: Namespace<i32> = [(Symbol::intern("p"), 1), (Symbol::intern("q"), 2)]
            .into_iter()
            .collect();
        assert_eq!(ns.get_symbol(Symbol::intern("q")), Some(&2));
    }
}
