//! Built-in sample for `--sample`: enum declarations buried in unrelated
//! text and comments, and a `main()` that prints a few lookups.
//!
//! Combined with `--dump` the output is a complete C program, since the
//! dumped declarations define the enums the demo refers to.

pub const SAMPLE_SOURCE: &str = r##"
    stuff before
    enum Hello {
        Zero,
        One, /* a c style comment */
        Two,
        Three, // cpp style comment
        Five=/* embedded */ 5,
        Six,
        Ten=10,
        Large=10000,    // expected to be skipped
        };
    in the middle "a string with // and /* inside */ is left alone"
    typedef enum
        {
        alpha,
        beta,
        gamma
        = 10 ,
        zeta = 50
        } Blah;
    typedef enum Kuku
        {
        single
        } Kiki;
    at the end
    "##;

/// Demo program exercising the lookups generated for [`SAMPLE_SOURCE`].
pub fn sample_main(function_prefix: &str) -> String {
    let f = function_prefix;
    format!(
        r##"
#include <stdio.h>
int main(int argc, char **argv)
{{
    enum Hello h1 = Zero, h2 = Five, h3 = 7, h4 = 11;
    Blah b1 = alpha, b2 = gamma, b3 = -1, b4 = 17;
    Kiki k1 = single;
    printf("\n## Test enum str utility:\n\n");
    printf("# Hello - enum, no type\n");
    printf("h1 Zero %d - %s\n", h1, {f}Hello(h1));
    printf("h2 Five %d - %s\n", h2, {f}Hello(h2));
    printf("h3 (missing 7) %d - %s\n", h3, {f}Hello(h3));
    printf("h4 (out of range 11) %d - %s\n", h4, {f}Hello(h4));
    printf("# Blah - type enum, no enum name\n");
    printf("b1 alpha %d - %s\n", b1, {f}Blah(b1));
    printf("b2 gamma %d - %s\n", b2, {f}Blah(b2));
    printf("b3 (out of range -1) %d - %s\n", b3, {f}Blah(b3));
    printf("b4 (missing 17) %d - %s\n", b4, {f}Blah(b4));
    printf("# Kiki - type enum, enum name Kuku\n");
    printf("k1 single %d - %s\n", k1, {f}Kiki(k1));
    return 0;
}}
"##
    )
}
