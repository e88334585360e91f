// Copyright (c) phast contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! A tiny recursive-descent producer built on [`TreeBuilder`].
//!
//! It reads call statements like `f(1, g(2.5, $x), ...$rest);` and checks
//! that nested argument lists come out isolated and in source order.

use phast_ast::{
    Argument, ArgumentList, BuildError, EventRecorder, Expression, FunctionCall, Identifier,
    IntegerLiteral, Name, NamePart, Node, NodeKind, NumberLiteral, Root, TraversalEvent,
    TreeBuilder, Variable,
};

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Ident(String),
    Var(String),
    Int(String),
    Float(String),
    Ellipsis,
    LParen,
    RParen,
    Comma,
    Semi,
}

fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let chars: Vec<char> = source.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match c {
            ' ' | '\n' => i += 1,
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            ',' => {
                tokens.push(Token::Comma);
                i += 1;
            }
            ';' => {
                tokens.push(Token::Semi);
                i += 1;
            }
            '.' => {
                tokens.push(Token::Ellipsis);
                i += 3;
            }
            _ => {
                let start = i;
                while i < chars.len() && (chars[i].is_alphanumeric() || "_$.".contains(chars[i])) {
                    i += 1;
                }
                let word: String = chars[start..i].iter().collect();
                tokens.push(if let Some(name) = word.strip_prefix('$') {
                    Token::Var(name.to_string())
                } else if word.contains('.') {
                    Token::Float(word)
                } else if word.chars().all(|c| c.is_ascii_digit()) {
                    Token::Int(word)
                } else {
                    Token::Ident(word)
                });
            }
        }
    }
    tokens
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    builder: TreeBuilder,
}

impl Parser {
    fn new(source: &str) -> Self {
        Parser {
            tokens: lex(source),
            pos: 0,
            builder: TreeBuilder::new(),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        token
    }

    fn parse_file(&mut self) -> Result<Node, BuildError> {
        self.builder.open_list();
        while self.peek().is_some() {
            let expr = self.parse_expr()?;
            assert_eq!(self.bump(), Some(Token::Semi));
            self.builder.emit(Expression::new(expr));
        }
        let stmts = self.builder.close_list()?;
        self.builder.finish(Root::new(stmts))
    }

    fn parse_expr(&mut self) -> Result<Node, BuildError> {
        let node: Node = match self.bump() {
            Some(Token::Var(name)) => Variable::new(Identifier::new(name).into()).into(),
            Some(Token::Int(value)) => IntegerLiteral::new(value).into(),
            Some(Token::Float(value)) => NumberLiteral::new(value).into(),
            Some(Token::Ident(name)) => {
                // Single-valued children go through the arena too.
                let function = self
                    .builder
                    .alloc(Name::new(vec![NamePart::new(name).into()]));
                let arguments = self.parse_arguments()?;
                let function = self.builder.take(function)?;
                FunctionCall::new(function, arguments).into()
            }
            other => panic!("unexpected token {:?}", other),
        };
        Ok(node)
    }

    fn parse_arguments(&mut self) -> Result<Node, BuildError> {
        assert_eq!(self.bump(), Some(Token::LParen));
        self.builder.open_list();
        loop {
            match self.peek() {
                Some(Token::RParen) => {
                    self.bump();
                    break;
                }
                Some(Token::Comma) => {
                    self.bump();
                }
                _ => {
                    let variadic = self.peek() == Some(&Token::Ellipsis);
                    if variadic {
                        self.bump();
                    }
                    let mut argument = Argument::new(Some(self.parse_expr()?));
                    argument.variadic = variadic;
                    self.builder.emit(argument);
                }
            }
        }
        Ok(ArgumentList::new(self.builder.close_list()?).into())
    }
}

fn argument_count(node: &Node) -> usize {
    match node {
        Node::ArgumentList(list) => list.arguments.len(),
        _ => 0,
    }
}

#[test]
fn nested_calls_keep_their_own_arguments() {
    let mut parser = Parser::new("f(1, g(2.5, $x), ...$rest);");
    let root = parser.parse_file().unwrap();

    let Node::Root(root) = root else {
        panic!("expected a Root");
    };
    assert_eq!(root.stmts.len(), 1);
    let Node::Expression(stmt) = &root.stmts[0] else {
        panic!("expected an Expression");
    };
    let Some(Node::FunctionCall(outer)) = stmt.expr.as_deref() else {
        panic!("expected a FunctionCall");
    };
    let outer_args = outer.argument_list.as_deref().unwrap();
    assert_eq!(argument_count(outer_args), 3);

    let Node::ArgumentList(outer_args) = outer_args else {
        unreachable!();
    };
    let Node::Argument(second) = &outer_args.arguments[1] else {
        panic!("expected an Argument");
    };
    let Some(Node::FunctionCall(inner)) = second.expr.as_deref() else {
        panic!("expected the inner call");
    };
    assert_eq!(argument_count(inner.argument_list.as_deref().unwrap()), 2);

    let Node::Argument(third) = &outer_args.arguments[2] else {
        panic!("expected an Argument");
    };
    assert!(third.variadic);
}

#[test]
fn statements_in_source_order() {
    let mut parser = Parser::new("a(); b(1); c(2, 3);");
    let root = parser.parse_file().unwrap();

    let names: Vec<String> = EventRecorder::record(&root)
        .iter()
        .filter(|e| {
            matches!(
                e,
                TraversalEvent::EnterNode {
                    kind: NodeKind::ArgumentList
                }
            )
        })
        .map(|e| e.to_string())
        .collect();
    assert_eq!(names.len(), 3);

    let Node::Root(root) = root else {
        panic!("expected a Root");
    };
    let counts: Vec<usize> = root
        .stmts
        .iter()
        .map(|stmt| match stmt {
            Node::Expression(e) => match e.expr.as_deref() {
                Some(Node::FunctionCall(call)) => {
                    argument_count(call.argument_list.as_deref().unwrap())
                }
                _ => usize::MAX,
            },
            _ => usize::MAX,
        })
        .collect();
    assert_eq!(counts, vec![0, 1, 2]);
}

#[test]
fn builder_is_clean_after_finish() {
    let mut parser = Parser::new("f(g(h(1)));");
    parser.parse_file().unwrap();
    assert_eq!(parser.builder.depth(), 0);
    assert_eq!(parser.builder.pending(), 0);
}
