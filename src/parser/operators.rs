//! The binary operator precedence table.
//!
//! Precedences run from 1 (loosest) to 18 (tightest). The table starts out
//! with the builtin operators and grows whenever a `binary` prototype is
//! parsed, so operators declared by one parse are visible to the next.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Characters that may form an operator. Two of them written next to each
/// other are read as a single two-character operator.
pub const OPERATOR_CHARS: &str = "<>+-*/%!&|=";

pub const MIN_PRECEDENCE: u32 = 1;
pub const MAX_PRECEDENCE: u32 = 18;

lazy_static! {
    static ref BUILTIN_PRECEDENCE: HashMap<&'static str, u32> = {
        let mut map = HashMap::new();
        map.insert("**", 14);
        map.insert("*", 13);
        map.insert("/", 13);
        map.insert("%", 13);
        map.insert("+", 12);
        map.insert("-", 12);
        map.insert("<", 10);
        map.insert(">", 10);
        map.insert("<=", 10);
        map.insert(">=", 10);
        map.insert("==", 9);
        map.insert("!=", 9);
        map.insert("&&", 5);
        map.insert("||", 4);
        map.insert("=", 3);
        map
    };
}

pub fn is_operator_char(c: char) -> bool {
    OPERATOR_CHARS.contains(c)
}

pub fn is_valid_precedence(precedence: u32) -> bool {
    (MIN_PRECEDENCE..=MAX_PRECEDENCE).contains(&precedence)
}

#[derive(Debug, Clone, PartialEq)]
pub struct OperatorTable {
    precedence: HashMap<String, u32>,
}

impl OperatorTable {
    /// A table with no operators at all.
    pub fn empty() -> Self {
        OperatorTable {
            precedence: HashMap::new(),
        }
    }

    /// Precedence of `spelling`, or `None` when it is not a binary operator.
    ///
    /// A zero entry is never reported as a precedence.
    pub fn lookup(&self, spelling: &str) -> Option<u32> {
        self.precedence.get(spelling).copied().filter(|p| *p > 0)
    }

    /// Inserts or overwrites the precedence of `spelling`.
    pub fn declare(&mut self, spelling: impl Into<String>, precedence: u32) {
        self.precedence.insert(spelling.into(), precedence);
    }

    pub fn len(&self) -> usize {
        self.precedence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.precedence.is_empty()
    }

    /// All operators, tightest first, ties ordered by spelling.
    pub fn operators(&self) -> Vec<(&str, u32)> {
        let mut operators: Vec<(&str, u32)> = self
            .precedence
            .iter()
            .map(|(op, prec)| (op.as_str(), *prec))
            .collect();
        operators.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        operators
    }
}

impl Default for OperatorTable {
    fn default() -> Self {
        OperatorTable {
            precedence: BUILTIN_PRECEDENCE
                .iter()
                .map(|(op, prec)| (op.to_string(), *prec))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_operators() {
        let table = OperatorTable::default();

        assert_eq!(table.lookup("**"), Some(14));
        assert_eq!(table.lookup("*"), Some(13));
        assert_eq!(table.lookup("+"), Some(12));
        assert_eq!(table.lookup("<="), Some(10));
        assert_eq!(table.lookup("!="), Some(9));
        assert_eq!(table.lookup("&&"), Some(5));
        assert_eq!(table.lookup("||"), Some(4));
        assert_eq!(table.lookup("="), Some(3));
        assert_eq!(table.len(), 15);
    }

    #[test]
    fn test_unknown_operator_is_not_an_operator() {
        let table = OperatorTable::default();

        assert_eq!(table.lookup("~"), None);
        assert_eq!(table.lookup("!"), None);
        assert_eq!(table.lookup(")"), None);
    }

    #[test]
    fn test_declare_inserts_and_overwrites() {
        let mut table = OperatorTable::default();

        table.declare("|>", 2);
        assert_eq!(table.lookup("|>"), Some(2));

        table.declare("+", 16);
        assert_eq!(table.lookup("+"), Some(16));
    }

    #[test]
    fn test_zero_precedence_is_never_returned() {
        let mut table = OperatorTable::empty();
        table.declare("@", 0);

        assert_eq!(table.lookup("@"), None);
    }

    #[test]
    fn test_operators_sorted_tightest_first() {
        let table = OperatorTable::default();
        let operators = table.operators();

        assert_eq!(operators[0], ("**", 14));
        assert_eq!(operators.last(), Some(&("=", 3)));
    }

    #[test]
    fn test_operator_chars() {
        assert!(OPERATOR_CHARS.chars().all(is_operator_char));
        assert!(!is_operator_char('('));
        assert!(!is_operator_char('~'));
        assert!(is_valid_precedence(1));
        assert!(is_valid_precedence(18));
        assert!(!is_valid_precedence(0));
        assert!(!is_valid_precedence(19));
    }
}
