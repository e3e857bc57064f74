// Copyright (C) The LOLCODE Tooling Team.
// This file is part of lolcode-parser.

// lolcode-parser is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// lolcode-parser is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with lolcode-parser. If not, see <https://www.gnu.org/licenses/>.

use crate::parser::parse;
use crate::token::{Token, TokenKind};
use lolcode_ast::*;
use lolcode_errors::{Handler, ParseError};
use lolcode_span::{create_session_if_not_set_then, Span, Symbol};

fn span(line: u32) -> Span {
    Span::new(Symbol::intern("test.lol"), line)
}

fn tok(kind: TokenKind, line: u32) -> Token {
    Token::new(kind, span(line))
}

fn ident(name: &str, line: u32) -> Token {
    tok(TokenKind::Ident(Symbol::intern(name)), line)
}

/// Wraps a token-building-and-parsing closure in one interning session, the
/// way the real entry point wraps one parse -- so identifiers built by the
/// test and identifiers returned by the parser compare equal.
fn run(f: impl FnOnce() -> lolcode_errors::Result<Main>) -> lolcode_errors::Result<Main> {
    create_session_if_not_set_then(|_| f())
}

fn parse_tokens(tokens: Vec<Token>) -> lolcode_errors::Result<Main> {
    let handler = Handler::new();
    parse(&handler, tokens)
}

#[test]
fn s1_prints_a_string_literal() {
    let main = run(|| {
        parse_tokens(vec![
            tok(TokenKind::Hai, 1),
            tok(TokenKind::Float(1.2), 1),
            tok(TokenKind::Newline, 1),
            tok(TokenKind::Visible, 2),
            tok(TokenKind::Str("hi".to_string()), 2),
            tok(TokenKind::Newline, 2),
            tok(TokenKind::Kthxbye, 3),
            tok(TokenKind::Eof, 3),
        ])
    })
    .unwrap();

    assert_eq!(main.block.statements.len(), 1);
    match &main.block.statements[0] {
        Statement::Print(p) => {
            assert!(!p.suppress_newline);
            assert_eq!(p.args.len(), 1);
            assert_eq!(p.args[0], Expression::Constant(ConstantExpression { value: Constant::String("hi".into()), span: span(2) }));
        }
        other => panic!("expected Print, got {other:?}"),
    }
}

#[test]
fn s2_declares_with_initial_value() {
    let main = run(|| {
        parse_tokens(vec![
            tok(TokenKind::Hai, 1),
            tok(TokenKind::Float(1.2), 1),
            tok(TokenKind::Newline, 1),
            ident("I", 2),
            tok(TokenKind::HasA, 2),
            ident("X", 2),
            tok(TokenKind::Itz, 2),
            tok(TokenKind::Integer(5), 2),
            tok(TokenKind::Newline, 2),
            tok(TokenKind::Kthxbye, 3),
            tok(TokenKind::Eof, 3),
        ])
    })
    .unwrap();

    match &main.block.statements[0] {
        Statement::Declaration(d) => {
            assert!(d.target.matches(&Identifier::new(Symbol::intern("X"), span(2))));
            assert_eq!(d.init, Some(Expression::Constant(ConstantExpression { value: Constant::Integer(5), span: span(2) })));
            assert_eq!(d.declared_type, None);
        }
        other => panic!("expected Declaration, got {other:?}"),
    }
}

#[test]
fn s3_binary_op_becomes_expr_statement() {
    let main = run(|| {
        parse_tokens(vec![
            tok(TokenKind::Hai, 1),
            tok(TokenKind::Float(1.2), 1),
            tok(TokenKind::Newline, 1),
            tok(TokenKind::SumOf, 2),
            tok(TokenKind::Integer(1), 2),
            tok(TokenKind::An, 2),
            tok(TokenKind::Integer(2), 2),
            tok(TokenKind::Newline, 2),
            tok(TokenKind::Kthxbye, 3),
            tok(TokenKind::Eof, 3),
        ])
    })
    .unwrap();

    match &main.block.statements[0] {
        Statement::ExprStmt(e) => match &e.expression {
            Expression::Op(op) => {
                assert_eq!(op.op, OpKind::Add);
                assert_eq!(op.args.len(), 2);
            }
            other => panic!("expected Op, got {other:?}"),
        },
        other => panic!("expected ExprStmt, got {other:?}"),
    }
}

#[test]
fn s4_loop_with_uppin_update_and_wile_guard() {
    let main = run(|| {
        parse_tokens(vec![
            tok(TokenKind::Hai, 1),
            tok(TokenKind::Float(1.2), 1),
            tok(TokenKind::Newline, 1),
            tok(TokenKind::ImInYr, 2),
            ident("L", 2),
            tok(TokenKind::Uppin, 2),
            tok(TokenKind::Yr, 2),
            ident("I", 2),
            tok(TokenKind::Wile, 2),
            tok(TokenKind::BothSaem, 2),
            ident("I", 2),
            tok(TokenKind::An, 2),
            tok(TokenKind::Integer(10), 2),
            tok(TokenKind::Newline, 2),
            tok(TokenKind::Visible, 3),
            ident("I", 3),
            tok(TokenKind::Newline, 3),
            tok(TokenKind::ImOuttaYr, 4),
            ident("L", 4),
            tok(TokenKind::Newline, 4),
            tok(TokenKind::Kthxbye, 5),
            tok(TokenKind::Eof, 5),
        ])
    })
    .unwrap();

    match &main.block.statements[0] {
        Statement::Loop(l) => {
            assert!(l.var.is_some());
            match l.update.as_ref().unwrap() {
                Expression::Op(op) => assert_eq!(op.op, OpKind::Add),
                other => panic!("expected Op, got {other:?}"),
            }
            let (kind, guard) = l.guard.as_ref().unwrap();
            assert_eq!(*kind, LoopGuardKind::Wile);
            match guard {
                Expression::Op(op) => assert_eq!(op.op, OpKind::Eq),
                other => panic!("expected Op, got {other:?}"),
            }
            assert_eq!(l.body.statements.len(), 1);
        }
        other => panic!("expected Loop, got {other:?}"),
    }
}

#[test]
fn s5_nary_and_carries_all_arguments() {
    let main = run(|| {
        parse_tokens(vec![
            tok(TokenKind::Hai, 1),
            tok(TokenKind::Float(1.2), 1),
            tok(TokenKind::Newline, 1),
            tok(TokenKind::AllOf, 2),
            tok(TokenKind::Boolean(true), 2),
            tok(TokenKind::An, 2),
            tok(TokenKind::Boolean(false), 2),
            tok(TokenKind::An, 2),
            tok(TokenKind::Boolean(true), 2),
            tok(TokenKind::Mkay, 2),
            tok(TokenKind::Newline, 2),
            tok(TokenKind::Kthxbye, 3),
            tok(TokenKind::Eof, 3),
        ])
    })
    .unwrap();

    match &main.block.statements[0] {
        Statement::ExprStmt(e) => match &e.expression {
            Expression::Op(op) => {
                assert_eq!(op.op, OpKind::And);
                assert_eq!(op.args.len(), 3);
            }
            other => panic!("expected Op, got {other:?}"),
        },
        other => panic!("expected ExprStmt, got {other:?}"),
    }
}

#[test]
fn s6_mismatched_loop_name_is_rejected() {
    let result = run(|| {
        parse_tokens(vec![
            tok(TokenKind::Hai, 1),
            tok(TokenKind::Float(1.2), 1),
            tok(TokenKind::Newline, 1),
            tok(TokenKind::ImInYr, 2),
            ident("L", 2),
            tok(TokenKind::Newline, 2),
            tok(TokenKind::ImOuttaYr, 3),
            ident("M", 3),
            tok(TokenKind::Newline, 3),
            tok(TokenKind::Kthxbye, 4),
            tok(TokenKind::Eof, 4),
        ])
    });

    assert!(matches!(result, Err(ParseError::mismatched_loop_name { .. })));
}

#[test]
fn program_without_hai_is_rejected() {
    let result = run(|| {
        parse_tokens(vec![
            tok(TokenKind::Visible, 1),
            tok(TokenKind::Integer(1), 1),
            tok(TokenKind::Newline, 1),
            tok(TokenKind::Eof, 1),
        ])
    });

    assert!(matches!(result, Err(ParseError::missing_greeting { .. })));
}

#[test]
fn switch_with_no_cases_is_rejected() {
    let result = run(|| {
        parse_tokens(vec![
            tok(TokenKind::Hai, 1),
            tok(TokenKind::Float(1.2), 1),
            tok(TokenKind::Newline, 1),
            tok(TokenKind::Wtf, 2),
            tok(TokenKind::Newline, 2),
            tok(TokenKind::Oic, 3),
            tok(TokenKind::Newline, 3),
            tok(TokenKind::Kthxbye, 4),
            tok(TokenKind::Eof, 4),
        ])
    });

    assert!(matches!(result, Err(ParseError::missing_case { .. })));
}

#[test]
fn loop_update_recognizes_a_declared_unary_function() {
    // HOW IZ I DOUBLE YR N
    //   FOUND YR SUM OF N AN N
    // IF U SAY SO
    // IM IN YR L DOUBLE YR X WILE BOTH SAEM X AN 10
    //   VISIBLE X
    // IM OUTTA YR L
    let main = run(|| {
        parse_tokens(vec![
            tok(TokenKind::Hai, 1),
            tok(TokenKind::Float(1.2), 1),
            tok(TokenKind::Newline, 1),
            tok(TokenKind::HowIz, 2),
            ident("I", 2),
            ident("DOUBLE", 2),
            tok(TokenKind::Yr, 2),
            ident("N", 2),
            tok(TokenKind::Newline, 2),
            tok(TokenKind::FoundYr, 3),
            tok(TokenKind::SumOf, 3),
            ident("N", 3),
            tok(TokenKind::An, 3),
            ident("N", 3),
            tok(TokenKind::Newline, 3),
            tok(TokenKind::IfUSaySo, 4),
            tok(TokenKind::Newline, 4),
            tok(TokenKind::ImInYr, 5),
            ident("L", 5),
            ident("DOUBLE", 5),
            tok(TokenKind::Yr, 5),
            ident("X", 5),
            tok(TokenKind::Wile, 5),
            tok(TokenKind::BothSaem, 5),
            ident("X", 5),
            tok(TokenKind::An, 5),
            tok(TokenKind::Integer(10), 5),
            tok(TokenKind::Newline, 5),
            tok(TokenKind::Visible, 6),
            ident("X", 6),
            tok(TokenKind::Newline, 6),
            tok(TokenKind::ImOuttaYr, 7),
            ident("L", 7),
            tok(TokenKind::Newline, 7),
            tok(TokenKind::Kthxbye, 8),
            tok(TokenKind::Eof, 8),
        ])
    })
    .unwrap();

    match &main.block.statements[1] {
        Statement::Loop(l) => match l.update.as_ref().unwrap() {
            Expression::FuncCall(call) => {
                assert!(call.name.matches(&Identifier::new(Symbol::intern("DOUBLE"), span(5))));
                assert_eq!(call.args.len(), 1);
            }
            other => panic!("expected FuncCall, got {other:?}"),
        },
        other => panic!("expected Loop, got {other:?}"),
    }
}

#[test]
#[should_panic(expected = "too few arguments")]
fn op_expression_enforces_min_arity() {
    let _ = OpExpression::new(OpKind::Add, vec![], Span::dummy());
}
