use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cart::lexer::Lexer;
use cart::normalize::normalize;

const HELLO: &str = r#"
#include <stdio.h>

int main(void) {
    printf("Hello, world!\n");
    return 0;
}
"#;

const MACROS: &str = r#"
#include <stdlib.h>
#include <string.h>
#define MAX(a, b) ((a) > (b) ? (a) : (b))
#define STR(x) #x
#define CAT(a, b) a ## b

static int clamp(int v, int lo, int hi) { return MAX(lo, v < hi ? v : hi); }
"#;

const REALISTIC: &str = r#"
/* Word frequency counter. */
#include <ctype.h>
#include <stdio.h>
#include <stdlib.h>
#include <string.h>

#define BUCKETS 1024

struct entry {
    char *word;
    unsigned count;
    struct entry *next;
};

static struct entry *table[BUCKETS];

static unsigned long hash(const char *s) {
    unsigned long h = 5381;
    while (*s) h = ((h << 5) + h) + (unsigned char)*s++;
    return h % BUCKETS;
}

static void add(const char *w) {
    unsigned long h = hash(w);
    for (struct entry *e = table[h]; e; e = e->next) {
        if (strcmp(e->word, w) == 0) { e->count++; return; }
    }
    struct entry *e = malloc(sizeof *e);
    e->word = strdup(w);
    e->count = 1;
    e->next = table[h];
    table[h] = e;
}

int main(int argc, char **argv) {
    char buf[256];
    size_t n = 0;
    int c;
    while ((c = getchar()) != EOF) {
        if (isalpha(c) && n < sizeof buf - 1) { buf[n++] = (char)tolower(c); continue; }
        if (n) { buf[n] = '\0'; add(buf); n = 0; }
    }
    for (size_t i = 0; i < BUCKETS; i++)
        for (struct entry *e = table[i]; e; e = e->next)
            printf("%7u %s\n", e->count, e->word);
    return 0;
}
"#;

fn bench_lex(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");
    for (name, src) in [("hello", HELLO), ("macros", MACROS), ("realistic", REALISTIC)] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut lex = Lexer::new(black_box(src));
                lex.tokenize().unwrap()
            })
        });
    }
    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    for (name, src) in [("hello", HELLO), ("macros", MACROS), ("realistic", REALISTIC)] {
        let tokens = Lexer::new(src).tokenize().unwrap();
        group.bench_function(name, |b| b.iter(|| normalize(black_box(&tokens))));
    }
    group.finish();
}

fn bench_lex_and_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("lex+normalize");
    for (name, src) in [("hello", HELLO), ("macros", MACROS), ("realistic", REALISTIC)] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let tokens = Lexer::new(black_box(src)).tokenize().unwrap();
                normalize(&tokens)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lex, bench_normalize, bench_lex_and_normalize);
criterion_main!(benches);
