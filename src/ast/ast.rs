use crate::token::Token;
use std::fmt::Write as _;

/// Shared capability set for every statement and expression node: the literal
/// of the token that introduced the node, and a canonical, fully
/// parenthesized rendering used by tests and debugging.
pub trait Node {
    fn token_literal(&self) -> &str;
    fn render(&self) -> String;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }

    fn render(&self) -> String {
        self.value.clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

impl Node for IntegerLiteral {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }

    fn render(&self) -> String {
        self.value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Boolean {
    pub token: Token,
    pub value: bool,
}

impl Node for Boolean {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }

    fn render(&self) -> String {
        self.value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpression {
    pub token: Token,
    pub operator: String,
    pub right: Box<Expression>,
}

impl Node for PrefixExpression {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }

    fn render(&self) -> String {
        format!("({}{})", self.operator, self.right.render())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpression {
    pub token: Token,
    pub left: Box<Expression>,
    pub operator: String,
    pub right: Box<Expression>,
}

impl Node for InfixExpression {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }

    fn render(&self) -> String {
        format!(
            "({} {} {})",
            self.left.render(),
            self.operator,
            self.right.render()
        )
    }
}

/// A brace-delimited sequence of statements: the body of an `if`/`else`
/// branch or a function literal. Not itself a top-level `Statement` variant
/// — the grammar only ever produces a block as a sub-structure of those two
/// constructs.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    pub token: Token,
    pub statements: Vec<Statement>,
}

impl Node for BlockStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }

    fn render(&self) -> String {
        self.statements.iter().map(Statement::render).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfExpression {
    pub token: Token,
    pub condition: Box<Expression>,
    pub consequence: BlockStatement,
    pub alternative: Option<BlockStatement>,
}

impl Node for IfExpression {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }

    fn render(&self) -> String {
        let mut out = format!("if{} {}", self.condition.render(), self.consequence.render());
        if let Some(alt) = &self.alternative {
            let _ = write!(out, "else {}", alt.render());
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLiteral {
    pub token: Token,
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}

impl Node for FunctionLiteral {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }

    fn render(&self) -> String {
        let params: Vec<String> = self.parameters.iter().map(Identifier::render).collect();
        format!(
            "{}({}) {}",
            self.token_literal(),
            params.join(", "),
            self.body.render()
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub token: Token,
    pub function: Box<Expression>,
    pub arguments: Vec<Expression>,
}

impl Node for CallExpression {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }

    fn render(&self) -> String {
        let args: Vec<String> = self.arguments.iter().map(Expression::render).collect();
        format!("{}({})", self.function.render(), args.join(", "))
    }
}

/// Every expression the parser can produce, as a single tagged union rather
/// than a trait object — later stages pattern-match on this instead of
/// relying on dynamic dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral(IntegerLiteral),
    Boolean(Boolean),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    FunctionLiteral(FunctionLiteral),
    Call(CallExpression),
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(e) => e.token_literal(),
            Expression::IntegerLiteral(e) => e.token_literal(),
            Expression::Boolean(e) => e.token_literal(),
            Expression::Prefix(e) => e.token_literal(),
            Expression::Infix(e) => e.token_literal(),
            Expression::If(e) => e.token_literal(),
            Expression::FunctionLiteral(e) => e.token_literal(),
            Expression::Call(e) => e.token_literal(),
        }
    }

    fn render(&self) -> String {
        match self {
            Expression::Identifier(e) => e.render(),
            Expression::IntegerLiteral(e) => e.render(),
            Expression::Boolean(e) => e.render(),
            Expression::Prefix(e) => e.render(),
            Expression::Infix(e) => e.render(),
            Expression::If(e) => e.render(),
            Expression::FunctionLiteral(e) => e.render(),
            Expression::Call(e) => e.render(),
        }
    }
}

/// `value` is null whenever the parser recovered from an error while parsing
/// the right-hand side — the statement is still produced so the outer loop
/// can keep going, it just carries no value to render.
#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement {
    pub token: Token,
    pub name: Identifier,
    pub value: Option<Expression>,
}

impl Node for LetStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }

    fn render(&self) -> String {
        let value = self.value.as_ref().map(Expression::render).unwrap_or_default();
        format!("{} {} = {};", self.token_literal(), self.name.render(), value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub token: Token,
    pub value: Option<Expression>,
}

impl Node for ReturnStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }

    fn render(&self) -> String {
        let value = self.value.as_ref().map(Expression::render).unwrap_or_default();
        format!("{} {};", self.token_literal(), value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub token: Token,
    pub expression: Option<Expression>,
}

impl Node for ExpressionStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }

    fn render(&self) -> String {
        self.expression.as_ref().map(Expression::render).unwrap_or_default()
    }
}

/// Every statement the parser can produce at the top level or inside a block.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Statement::Let(s) => s.token_literal(),
            Statement::Return(s) => s.token_literal(),
            Statement::Expression(s) => s.token_literal(),
        }
    }

    fn render(&self) -> String {
        match self {
            Statement::Let(s) => s.render(),
            Statement::Return(s) => s.render(),
            Statement::Expression(s) => s.render(),
        }
    }
}

/// The root AST node: an ordered sequence of top-level statements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(Statement::token_literal)
            .unwrap_or("")
    }

    fn render(&self) -> String {
        self.statements.iter().map(Statement::render).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    #[test]
    fn let_statement_renders_canonically() {
        let program = Program {
            statements: vec![Statement::Let(LetStatement {
                token: Token::new(TokenKind::Let, "let"),
                name: Identifier {
                    token: Token::new(TokenKind::Ident, "myVar"),
                    value: "myVar".to_string(),
                },
                value: Some(Expression::Identifier(Identifier {
                    token: Token::new(TokenKind::Ident, "anotherVar"),
                    value: "anotherVar".to_string(),
                })),
            })],
        };

        assert_eq!(program.render(), "let myVar = anotherVar;");
    }

    #[test]
    fn program_render_concatenates_with_no_separator() {
        let program = Program {
            statements: vec![
                Statement::Expression(ExpressionStatement {
                    token: Token::new(TokenKind::Ident, "a"),
                    expression: Some(Expression::Identifier(Identifier {
                        token: Token::new(TokenKind::Ident, "a"),
                        value: "a".to_string(),
                    })),
                }),
                Statement::Expression(ExpressionStatement {
                    token: Token::new(TokenKind::Ident, "b"),
                    expression: Some(Expression::Identifier(Identifier {
                        token: Token::new(TokenKind::Ident, "b"),
                        value: "b".to_string(),
                    })),
                }),
            ],
        };

        assert_eq!(program.render(), "ab");
    }
}
