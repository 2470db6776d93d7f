//! Symbolic scalar expressions.
//!
//! [`Expression`] is an immutable, reference-counted expression tree. Cloning
//! is a reference-count bump; building new nodes allocates. Constant operands
//! are folded eagerly and additive/multiplicative identities are dropped, so
//! vector algorithms that start from zero accumulators produce compact trees.

use super::{sealed, Scalar};
use num_traits::{One, Zero};
use std::collections::HashMap;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub struct Expression(Rc<Node>);

#[derive(Debug, PartialEq)]
enum Node {
    Constant(f64),
    Variable(String),
    Add(Expression, Expression),
    Mul(Expression, Expression),
    Neg(Expression),
    Abs(Expression),
    Max(Expression, Expression),
}

impl Expression {
    fn node(node: Node) -> Self {
        Expression(Rc::new(node))
    }

    pub fn constant(value: f64) -> Self {
        Self::node(Node::Constant(value))
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Self::node(Node::Variable(name.into()))
    }

    /// The value of a constant expression, `None` for anything that mentions a variable.
    pub fn as_constant(&self) -> Option<f64> {
        match *self.0 {
            Node::Constant(c) => Some(c),
            _ => None,
        }
    }

    pub fn abs(&self) -> Self {
        match self.as_constant() {
            Some(c) => Self::constant(c.abs()),
            None => Self::node(Node::Abs(self.clone())),
        }
    }

    pub fn max(self, other: Self) -> Self {
        match (self.as_constant(), other.as_constant()) {
            (Some(a), Some(b)) => Self::constant(a.max(b)),
            _ if self == other => self,
            _ => Self::node(Node::Max(self, other)),
        }
    }

    /// Evaluates the expression with variables bound from `env`.
    ///
    /// Returns `None` if a variable is unbound.
    pub fn evaluate(&self, env: &HashMap<String, f64>) -> Option<f64> {
        Some(match &*self.0 {
            Node::Constant(c) => *c,
            Node::Variable(name) => *env.get(name.as_str())?,
            Node::Add(a, b) => a.evaluate(env)? + b.evaluate(env)?,
            Node::Mul(a, b) => a.evaluate(env)? * b.evaluate(env)?,
            Node::Neg(a) => -a.evaluate(env)?,
            Node::Abs(a) => a.evaluate(env)?.abs(),
            Node::Max(a, b) => a.evaluate(env)?.max(b.evaluate(env)?),
        })
    }
}

impl From<f64> for Expression {
    fn from(value: f64) -> Self {
        Self::constant(value)
    }
}

impl Add for Expression {
    type Output = Expression;
    fn add(self, rhs: Expression) -> Expression {
        match (self.as_constant(), rhs.as_constant()) {
            (Some(a), Some(b)) => Expression::constant(a + b),
            (Some(a), _) if a == 0.0 => rhs,
            (_, Some(b)) if b == 0.0 => self,
            _ => Expression::node(Node::Add(self, rhs)),
        }
    }
}

impl Sub for Expression {
    type Output = Expression;
    fn sub(self, rhs: Expression) -> Expression {
        self + (-rhs)
    }
}

impl Mul for Expression {
    type Output = Expression;
    fn mul(self, rhs: Expression) -> Expression {
        match (self.as_constant(), rhs.as_constant()) {
            (Some(a), Some(b)) => Expression::constant(a * b),
            (Some(a), _) | (_, Some(a)) if a == 0.0 => Expression::zero(),
            (Some(a), _) if a == 1.0 => rhs,
            (_, Some(b)) if b == 1.0 => self,
            _ => Expression::node(Node::Mul(self, rhs)),
        }
    }
}

impl Neg for Expression {
    type Output = Expression;
    fn neg(self) -> Expression {
        if let Some(c) = self.as_constant() {
            return Expression::constant(-c);
        }
        if let Node::Neg(inner) = &*self.0 {
            return inner.clone();
        }
        Expression::node(Node::Neg(self))
    }
}

impl Zero for Expression {
    fn zero() -> Self {
        Self::constant(0.0)
    }

    fn is_zero(&self) -> bool {
        self.as_constant() == Some(0.0)
    }
}

impl One for Expression {
    fn one() -> Self {
        Self::constant(1.0)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.0 {
            Node::Constant(c) => fmt::Display::fmt(c, f),
            Node::Variable(name) => f.write_str(name),
            Node::Add(a, b) => write!(f, "({} + {})", a, b),
            Node::Mul(a, b) => write!(f, "({} * {})", a, b),
            Node::Neg(a) => write!(f, "-{}", a),
            Node::Abs(a) => write!(f, "abs({})", a),
            Node::Max(a, b) => write!(f, "max({}, {})", a, b),
        }
    }
}

impl sealed::Sealed for Expression {}

impl Scalar for Expression {
    fn magnitude(&self) -> Self {
        self.abs()
    }

    fn larger(self, other: Self) -> Self {
        self.max(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_fold() {
        let e = Expression::constant(2.0) * Expression::constant(3.0) + Expression::constant(1.0);
        assert_eq!(e.as_constant(), Some(7.0));
    }

    #[test]
    fn identities_are_dropped() {
        let x = Expression::variable("x");
        assert_eq!(Expression::zero() + x.clone(), x);
        assert_eq!(x.clone() * Expression::one(), x);
        assert_eq!(x.clone() * Expression::zero(), Expression::zero());
        assert_eq!(-(-x.clone()), x);
    }

    #[test]
    fn renders_infix() {
        let x = Expression::variable("x");
        let y = Expression::variable("y");
        let e = Expression::constant(2.0) * x + y.abs();
        assert_eq!(e.to_string(), "((2 * x) + abs(y))");
    }

    #[test]
    fn evaluates_against_bindings() {
        let x = Expression::variable("x");
        let e = (x.clone() * x.clone() - Expression::constant(1.0)).max(Expression::constant(0.0));
        let mut env = HashMap::new();
        env.insert("x".to_string(), 3.0);
        assert_eq!(e.evaluate(&env), Some(8.0));
        assert_eq!(e.evaluate(&HashMap::new()), None);
    }
}
