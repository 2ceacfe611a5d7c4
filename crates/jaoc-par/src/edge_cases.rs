//! Parser edge cases: operator precedence/associativity, the added
//! `funcDecl`/`returnStmt` productions, and the specific structural error
//! kinds spec.md §7 names for the parser.

#[cfg(test)]
mod tests {
    use jaoc_util::{Interner, JaoError, ParseError};

    use crate::ast::{BinOp, Expr, Stmt, UnOp};
    use crate::Parser;

    fn parse_expr_in(source: &str) -> Expr {
        let full = format!("<< mostra_ae({source}) >>");
        let mut interner = Interner::new();
        let program = Parser::new(&full, &mut interner).unwrap().parse_program().unwrap();
        match &program.stmts[0] {
            Stmt::Print { expr, .. } => expr.clone(),
            other => panic!("expected print statement, got {other:?}"),
        }
    }

    #[test]
    fn arithmetic_is_left_associative_and_precedence_ordered() {
        // 2 + 3 * 4 must parse as 2 + (3 * 4), not (2 + 3) * 4.
        let expr = parse_expr_in("2 + 3 * 4");
        match expr {
            Expr::BinOp {
                op: BinOp::Add,
                lhs,
                rhs,
                ..
            } => {
                assert!(matches!(*lhs, Expr::IntLit(2, _)));
                assert!(matches!(*rhs, Expr::BinOp { op: BinOp::Mul, .. }));
            }
            other => panic!("unexpected shape: {other:?}"),
        }
    }

    #[test]
    fn subtraction_chain_is_left_associative() {
        // 10 - 3 - 2 must parse as (10 - 3) - 2.
        let expr = parse_expr_in("10 - 3 - 2");
        match expr {
            Expr::BinOp {
                op: BinOp::Sub,
                lhs,
                rhs,
                ..
            } => {
                assert!(matches!(*rhs, Expr::IntLit(2, _)));
                assert!(matches!(*lhs, Expr::BinOp { op: BinOp::Sub, .. }));
            }
            other => panic!("unexpected shape: {other:?}"),
        }
    }

    #[test]
    fn leftmost_unary_binds_outermost() {
        // -!x: '-' is written first so it is the outermost node.
        let expr = parse_expr_in("-!eh_tudo");
        match expr {
            Expr::UnOp {
                op: UnOp::Neg,
                operand,
                ..
            } => assert!(matches!(*operand, Expr::UnOp { op: UnOp::Not, .. })),
            other => panic!("unexpected shape: {other:?}"),
        }
    }

    #[test]
    fn or_binds_looser_than_and() {
        let expr = parse_expr_in("eh_tudo && eh_nada || eh_tudo");
        assert!(matches!(expr, Expr::BinOp { op: BinOp::Or, .. }));
    }

    #[test]
    fn missing_quando_after_repeat_is_structural_error() {
        let mut interner = Interner::new();
        let err = Parser::new("<< repete_ate_jao << >> >>", &mut interner)
            .unwrap()
            .parse_program()
            .unwrap_err();
        assert!(matches!(err, JaoError::Parse(ParseError::MissingQuando { .. })));
    }

    #[test]
    fn func_decl_and_return_round_trip() {
        let mut interner = Interner::new();
        let program = Parser::new(
            "<< cria_ai soma(inteirao a, inteirao b) inteirao << devolve_ai a + b >> >>",
            &mut interner,
        )
        .unwrap()
        .parse_program()
        .unwrap();
        match &program.stmts[0] {
            Stmt::FuncDecl { params, ret_ty, body, .. } => {
                assert_eq!(params.len(), 2);
                assert_eq!(*ret_ty, crate::ast::Ty::Int);
                assert!(matches!(body.stmts[0], Stmt::Return { .. }));
            }
            other => panic!("expected func decl, got {other:?}"),
        }
    }

    #[test]
    fn void_func_decl_has_no_return_type_token() {
        let mut interner = Interner::new();
        let program = Parser::new("<< cria_ai saudacao() << mostra_ae(eh_tudo) >> >>", &mut interner)
            .unwrap()
            .parse_program()
            .unwrap();
        match &program.stmts[0] {
            Stmt::FuncDecl { ret_ty, .. } => assert_eq!(*ret_ty, crate::ast::Ty::Void),
            other => panic!("expected func decl, got {other:?}"),
        }
    }
}
