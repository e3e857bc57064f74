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

//! Round-trips a hand-built [`Main`] through `serde_json`, the way the AST
//! crate this workspace grew from exercises its own node types.

use lolcode_ast::{
    Block, ConstantExpression, DeclarationStatement, Expression, Identifier, Main, PrintStatement,
    Statement,
};
use lolcode_ast::Constant;
use lolcode_span::{create_session_if_not_set_then, Span, Symbol};

fn sample_main() -> Main {
    let span = Span::new(Symbol::intern("fixture.lol"), 1);
    let declaration = Statement::Declaration(DeclarationStatement {
        scope: Identifier::new(Symbol::intern("I"), span),
        target: Identifier::new(Symbol::intern("X"), span),
        init: Some(Expression::Constant(ConstantExpression { value: Constant::Integer(5), span })),
        declared_type: None,
        span,
    });
    let print = Statement::Print(PrintStatement {
        args: vec![Expression::Constant(ConstantExpression {
            value: Constant::String("hi".to_owned()),
            span,
        })],
        suppress_newline: false,
        span,
    });
    Main { version: 1.2, block: Block { statements: vec![declaration, print], span }, span }
}

#[test]
fn round_trips_through_a_json_value() {
    create_session_if_not_set_then(|_| {
        let original = sample_main();
        let value = serde_json::to_value(&original).expect("AST must serialize to a JSON value");
        let restored: Main =
            serde_json::from_value(value).expect("serialized AST must deserialize back");
        assert_eq!(original, restored);
    });
}

#[test]
fn round_trips_through_a_json_string() {
    create_session_if_not_set_then(|_| {
        let original = sample_main();
        let text = serde_json::to_string(&original).expect("AST must serialize to a JSON string");
        let restored: Main =
            serde_json::from_str(&text).expect("serialized AST must deserialize back");
        assert_eq!(original, restored);
    });
}

#[test]
fn object_keys_preserve_field_order() {
    create_session_if_not_set_then(|_| {
        let value = serde_json::to_value(sample_main()).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["version", "block", "span"]);
    });
}
