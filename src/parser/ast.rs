//! Abstract Syntax Tree definitions
//!
//! Closed tagged-variant node types for the CodeGo grammar. Nodes are
//! strictly tree-shaped: children are fully constructed before a node
//! is returned, ownership runs parent-to-child, and nothing is mutated
//! after construction.

use indexmap::IndexMap;

/// Root node: the non-empty ordered sequence of top-level statements
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

/// Statement node
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// Variable declaration: `Numero x = 5`
    VarDecl {
        basic_type: String,
        name: String,
        initializer: Option<Expr>,
        line: usize,
    },

    /// Assignment to an existing name: `x = 5`
    Assignment {
        name: String,
        value: Expr,
        line: usize,
    },

    /// Expression used in statement position
    Expression { expr: Expr, line: usize },

    /// A `#` comment, kept as a first-class statement
    Comment { text: String, line: usize },

    /// `Kung (condition) { ... }` — no else branch exists
    If {
        condition: Expr,
        body: Vec<Stmt>,
        line: usize,
    },

    /// `Kapag (condition) { Kaso ...: ... Hinto ... }`
    Switch {
        condition: Expr,
        cases: Vec<CaseClause>,
        line: usize,
    },

    /// `Habang (condition) { ... }`
    While {
        condition: Expr,
        body: Vec<Stmt>,
        line: usize,
    },

    /// `Bawat (item Sa collection) { ... }` — both names are bare
    /// identifiers
    ForEach {
        iterator: String,
        iterable: String,
        body: Vec<Stmt>,
        line: usize,
    },

    /// `Gawa name(parameters) { ... }`
    FunctionDecl {
        name: String,
        parameters: Vec<Parameter>,
        body: Vec<Stmt>,
        line: usize,
    },

    /// `name(arguments)` in statement position
    Call {
        name: String,
        arguments: Vec<Expr>,
        line: usize,
    },
}

/// One `Kaso` branch of a `Kapag` statement
#[derive(Debug, Clone, PartialEq)]
pub struct CaseClause {
    pub expression: Expr,
    pub body: Vec<Stmt>,
}

/// One function parameter, with an optional declared type
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub basic_type: Option<String>,
    pub name: String,
}

/// Expression node
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),

    Identifier(String),

    /// Left-associative fold over the single flat precedence level
    Binary {
        operator: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// `object.property`, chained left to right
    PropertyAccess {
        object: Box<Expr>,
        property: String,
    },

    /// `{ statements }` used where a term is expected
    Block(Vec<Stmt>),

    /// `[ ... ]` — only object items survive this rule
    List { items: Vec<Expr> },

    /// `{ name: expr, ... }` — insertion order preserved, duplicate
    /// names overwrite earlier entries
    Object {
        properties: IndexMap<String, Expr>,
    },
}

/// Literal value
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Integer(i64),
    Float(f64),
    Str(String),
    /// Boolean literals keep their raw spelling (`Tama` / `Mali`)
    Boolean(String),
}

/// The six operators of the expression grammar. `*` and `/` are
/// tokenized but no rule consumes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Greater,
    Less,
    GreaterEqual,
    LessEqual,
}

impl BinaryOp {
    /// Source spelling of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Greater => ">",
            Self::Less => "<",
            Self::GreaterEqual => ">=",
            Self::LessEqual => "<=",
        }
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
