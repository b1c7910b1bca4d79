use crate::interpreter::operator::Operator;

/// A node of an expression tree.
///
/// Children are exclusively owned by their parent, so a tree is a plain
/// rooted tree with no sharing and no cycles. Leaves are always `Operand` or
/// `Identifier`; `Unary` and `Binary` nodes always hold the number of children
/// their arity requires.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A numeric value.
    Operand(f64),
    /// A name carried through for future variable support. It has no value;
    /// evaluating it is an error.
    Identifier(String),
    /// A unary operation. By convention its single child is the right one.
    Unary {
        /// The operator to apply.
        op:      Operator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// A binary operation.
    Binary {
        /// The operator.
        op:    Operator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Node {
    /// Creates a unary node owning `operand`.
    #[must_use]
    pub fn unary(op: Operator, operand: Self) -> Self {
        Self::Unary { op,
                      operand: Box::new(operand) }
    }

    /// Creates a binary node owning both children.
    #[must_use]
    pub fn binary(op: Operator, left: Self, right: Self) -> Self {
        Self::Binary { op,
                       left: Box::new(left),
                       right: Box::new(right) }
    }

    /// Left child, if any. Only binary nodes have one.
    #[must_use]
    pub fn left(&self) -> Option<&Self> {
        match self {
            Self::Binary { left, .. } => Some(left),
            _ => None,
        }
    }

    /// Right child, if any. The operand of a unary node counts as its right
    /// child.
    #[must_use]
    pub fn right(&self) -> Option<&Self> {
        match self {
            Self::Binary { right, .. } => Some(right),
            Self::Unary { operand, .. } => Some(operand),
            _ => None,
        }
    }

    /// Returns `true` for `Operand` and `Identifier` nodes.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Operand(_) | Self::Identifier(_))
    }

    /// Text used for this node alone in pre-order and post-order renderings
    /// and in the sideways dump.
    fn label(&self) -> String {
        match self {
            Self::Operand(value) => value.to_string(),
            Self::Identifier(name) => name.clone(),
            Self::Unary { op, .. } | Self::Binary { op, .. } => op.notation_symbol().to_string(),
        }
    }
}

/// An expression tree, owning its root node.
///
/// Built once by [`crate::interpreter::builder::build`] and consumed by the
/// evaluator or by the traversals below. Nothing here mutates the tree, so
/// the same tree can be evaluated or rendered any number of times.
///
/// Traversals and evaluation recurse once per level. Trees from the builders
/// are at most [`crate::interpreter::builder::MAX_DEPTH`] levels deep; a tree
/// assembled by hand from [`Node`] constructors has no such bound.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpressionTree {
    root: Option<Node>,
}

impl ExpressionTree {
    /// Wraps a root node.
    #[must_use]
    pub const fn new(root: Node) -> Self {
        Self { root: Some(root) }
    }

    /// A tree without a root.
    #[must_use]
    pub const fn empty() -> Self {
        Self { root: None }
    }

    /// The root node, absent for an empty tree.
    #[must_use]
    pub const fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Returns `true` if the tree has no root.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Renders the tree in infix form with every operator subtree
    /// parenthesized, so the grouping is visible regardless of precedence.
    ///
    /// # Example
    /// ```
    /// use exprtree::build_expression_tree;
    ///
    /// let tree = build_expression_tree("2 + 3 * -4").unwrap();
    /// assert_eq!(tree.in_order(), "(2 + (3 * (-4)))");
    /// ```
    #[must_use]
    pub fn in_order(&self) -> String {
        let mut out = String::new();
        if let Some(root) = &self.root {
            in_order_into(root, &mut out);
        }
        out
    }

    /// Renders the tree root first, as space-separated words.
    ///
    /// Unary minus is written `neg`.
    ///
    /// # Example
    /// ```
    /// use exprtree::build_expression_tree;
    ///
    /// let tree = build_expression_tree("-(1 + 2) * 3").unwrap();
    /// assert_eq!(tree.pre_order(), "* neg + 1 2 3");
    /// ```
    #[must_use]
    pub fn pre_order(&self) -> String {
        let mut words = Vec::new();
        if let Some(root) = &self.root {
            pre_order_into(root, &mut words);
        }
        words.join(" ")
    }

    /// Renders the tree children first, as space-separated words. The result
    /// is the postfix form the tree was built from.
    ///
    /// # Example
    /// ```
    /// use exprtree::build_expression_tree;
    ///
    /// let tree = build_expression_tree("-(1 + 2) * 3").unwrap();
    /// assert_eq!(tree.post_order(), "1 2 + neg 3 *");
    /// ```
    #[must_use]
    pub fn post_order(&self) -> String {
        let mut words = Vec::new();
        if let Some(root) = &self.root {
            post_order_into(root, &mut words);
        }
        words.join(" ")
    }

    /// Draws the tree on its side: the right subtree above its parent, the
    /// left subtree below, four spaces of indentation per level, one node per
    /// line.
    ///
    /// # Example
    /// ```
    /// use exprtree::build_expression_tree;
    ///
    /// let tree = build_expression_tree("1 - 2").unwrap();
    /// assert_eq!(tree.render_sideways(), "    2\n-\n    1\n");
    /// ```
    #[must_use]
    pub fn render_sideways(&self) -> String {
        let mut out = String::new();
        if let Some(root) = &self.root {
            sideways_into(root, 0, &mut out);
        }
        out
    }
}

impl From<Node> for ExpressionTree {
    fn from(root: Node) -> Self {
        Self::new(root)
    }
}

impl std::fmt::Display for ExpressionTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.in_order())
    }
}

fn in_order_into(node: &Node, out: &mut String) {
    match node {
        Node::Operand(value) => out.push_str(&value.to_string()),
        Node::Identifier(name) => out.push_str(name),
        Node::Unary { op, operand } => {
            out.push('(');
            out.push_str(op.symbol());
            // Keyword operators need a separator from their operand.
            if op.symbol().starts_with(char::is_alphabetic) {
                out.push(' ');
            }
            in_order_into(operand, out);
            out.push(')');
        },
        Node::Binary { op, left, right } => {
            out.push('(');
            in_order_into(left, out);
            out.push(' ');
            out.push_str(op.symbol());
            out.push(' ');
            in_order_into(right, out);
            out.push(')');
        },
    }
}

fn pre_order_into(node: &Node, words: &mut Vec<String>) {
    words.push(node.label());
    if let Some(left) = node.left() {
        pre_order_into(left, words);
    }
    if let Some(right) = node.right() {
        pre_order_into(right, words);
    }
}

fn post_order_into(node: &Node, words: &mut Vec<String>) {
    if let Some(left) = node.left() {
        post_order_into(left, words);
    }
    if let Some(right) = node.right() {
        post_order_into(right, words);
    }
    words.push(node.label());
}

fn sideways_into(node: &Node, level: usize, out: &mut String) {
    if let Some(right) = node.right() {
        sideways_into(right, level + 1, out);
    }
    out.push_str(&"    ".repeat(level));
    out.push_str(&node.label());
    out.push('\n');
    if let Some(left) = node.left() {
        sideways_into(left, level + 1, out);
    }
}
