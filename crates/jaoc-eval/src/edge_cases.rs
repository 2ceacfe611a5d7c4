//! The six end-to-end scenarios from spec.md §8, plus a handful of
//! evaluator-specific edge cases (lexical scoping, return propagation
//! through loops).

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use jaoc_par::Parser;
    use jaoc_util::{Interner, JaoError, TypeError};

    use crate::Evaluator;

    fn run_with_stdin(source: &str, stdin: &str) -> Result<String, JaoError> {
        let mut interner = Interner::new();
        let program = Parser::new(source, &mut interner)?.parse_program()?;
        let mut stdout = Vec::new();
        let mut evaluator = Evaluator::new(&interner, Cursor::new(stdin.as_bytes()), &mut stdout);
        evaluator.run(&program)?;
        Ok(String::from_utf8(stdout).unwrap())
    }

    fn run(source: &str) -> Result<String, JaoError> {
        run_with_stdin(source, "")
    }

    #[test]
    fn scenario_1_arithmetic_and_print() {
        assert_eq!(run("<< mostra_ae(2 + 3 * 4) >>").unwrap(), "14\n");
    }

    #[test]
    fn scenario_2_variables_assignment_if_else() {
        let src = r#"
            << inteirao x vira 5
               se_liga_jao x > 3 << mostra_ae(eh_tudo) >>
               se_nao_jao      << mostra_ae(eh_nada) >> >>
        "#;
        assert_eq!(run(src).unwrap(), "true\n");
    }

    #[test]
    fn scenario_3_for_loop_summing() {
        let src = r#"
            << inteirao i vira 1
               inteirao s vira 0
               vai_rodando_ae i < 6 << s vira s + i
                                       i vira i + 1 >>
               mostra_ae(s) >>
        "#;
        assert_eq!(run(src).unwrap(), "15\n");
    }

    #[test]
    fn scenario_4_repeat_until_post_test() {
        let src = r#"
            << inteirao n vira 0
               repete_ate_jao << n vira n + 1 >> quando n < 3
               mostra_ae(n) >>
        "#;
        assert_eq!(run(src).unwrap(), "3\n");
    }

    #[test]
    fn scenario_5_string_concatenation_mixed_types() {
        let src = r#"
            << falae s vira "n="
               inteirao n vira 7
               mostra_ae(s + n) >>
        "#;
        assert_eq!(run(src).unwrap(), "n=7\n");
    }

    #[test]
    fn scenario_6_type_error_on_string_minus() {
        let src = "<< inteirao x vira 1 falae s vira \"a\" mostra_ae(x + s - 1) >>";
        let err = run(src).unwrap_err();
        assert!(matches!(err, JaoError::Type(TypeError::BadOperand { .. })));
    }

    #[test]
    fn division_floors_toward_negative_infinity() {
        assert_eq!(run("<< mostra_ae(7 / 2) >>").unwrap(), "3\n");
        assert_eq!(run("<< mostra_ae((0 - 7) / 2) >>").unwrap(), "-4\n");
    }

    #[test]
    fn division_floors_toward_negative_infinity_with_negative_divisor() {
        assert_eq!(run("<< mostra_ae((0 - 7) / (0 - 2)) >>").unwrap(), "3\n");
        assert_eq!(run("<< mostra_ae(7 / (0 - 2)) >>").unwrap(), "-4\n");
    }

    #[test]
    fn division_by_zero_is_arith_error() {
        let err = run("<< mostra_ae(1 / 0) >>").unwrap_err();
        assert!(matches!(err, JaoError::Arith(_)));
    }

    #[test]
    fn scan_falls_back_to_string_on_non_integer_input() {
        let src = "<< inteirao n vira escuta_ae_jao() mostra_ae(n) >>";
        let err = run_with_stdin(src, "abc\n").unwrap_err();
        assert!(matches!(err, JaoError::Type(TypeError::AssignmentMismatch { .. })));
    }

    #[test]
    fn scan_parses_integer_input() {
        let src = "<< inteirao n vira escuta_ae_jao() mostra_ae(n + 1) >>";
        assert_eq!(run_with_stdin(src, "41\n").unwrap(), "42\n");
    }

    #[test]
    fn for_loop_propagates_return_from_a_function_body() {
        let src = r#"
            << cria_ai primeiro_par(inteirao limite) inteirao
               << inteirao i vira 0
                  vai_rodando_ae i < limite
                  << se_liga_jao i == 4 << devolve_ai i >>
                     i vira i + 1 >>
                  devolve_ai 0 - 1 >>
               mostra_ae(primeiro_par(10)) >>
        "#;
        assert_eq!(run(src).unwrap(), "4\n");
    }

    #[test]
    fn function_calls_use_lexical_not_dynamic_scoping() {
        // `usa_global` can see the global `g` but not the caller-only `local`;
        // a dynamic-scoping bug would let it see `local` through the call site.
        let src = r#"
            << inteirao g vira 10
               cria_ai usa_global() inteirao << devolve_ai g >>
               cria_ai chama() inteirao
               << inteirao local vira 99
                  devolve_ai usa_global() >>
               mostra_ae(chama()) >>
        "#;
        assert_eq!(run(src).unwrap(), "10\n");
    }

    #[test]
    fn builtin_println_prints_each_argument_on_its_own_line() {
        assert_eq!(run("<< Println(1, eh_tudo, \"x\") >>").unwrap(), "1\ntrue\nx\n");
    }

    #[test]
    fn redeclaration_in_same_scope_is_name_error() {
        let err = run("<< inteirao x vira 1 inteirao x vira 2 >>").unwrap_err();
        assert!(matches!(err, JaoError::Name(_)));
    }

    #[test]
    fn variable_and_function_share_one_namespace() {
        let err = run("<< inteirao soma vira 1 cria_ai soma() << devolve_ai 1 >> >>").unwrap_err();
        assert!(matches!(err, JaoError::Name(_)));

        let err = run("<< cria_ai soma() << devolve_ai 1 >> inteirao soma vira 1 >>").unwrap_err();
        assert!(matches!(err, JaoError::Name(_)));
    }

    #[test]
    fn calling_a_non_function_identifier_is_kind_error() {
        let err = run("<< inteirao x vira 1 mostra_ae(x()) >>").unwrap_err();
        assert!(matches!(err, JaoError::Kind(_)));
    }
}
