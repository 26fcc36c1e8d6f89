use goroutine_grid::aggregator::summarize;
use goroutine_grid::output::{render_function_detail, render_summary};
use goroutine_grid::parser::parse_text;

const DUMP: &str = "\
goroutine 3 [chan send]:
main.produce()
\t/app/p.go:9 +0x1
main.main()
\t/app/main.go:4 +0x2

goroutine 4 [chan send]:
main.produce()
\t/app/p.go:9 +0x1
main.main()
\t/app/main.go:4 +0x2

goroutine 5 [IO wait]:
internal/poll.runtime_pollWait(0x7f, 0x72)
\t/usr/local/go/src/runtime/netpoll.go:351 +0x85
";

#[test]
fn test_render_summary_table() {
    let dump = parse_text(DUMP).unwrap();
    let table = render_summary(&summarize(&dump, None));

    assert!(table.starts_with("3 goroutines, 2 functions, 2 unique stacks, 0 warnings"));
    assert!(table.contains("States: chan send: 2, IO wait: 1"));
    assert!(table.contains("      2       1  main.produce()"));
    assert!(table.contains("      1       1  internal/poll.runtime_pollWait(0x7f, 0x72)"));
}

#[test]
fn test_render_function_detail() {
    let dump = parse_text(DUMP).unwrap();
    let detail = render_function_detail(&dump, "main.produce()").unwrap();

    assert!(detail.contains("Occurrences: 2"));
    assert!(detail.contains(&dump.routines()[0].raw));
    assert!(detail.contains("goroutine ids: 3,4"));
}

#[test]
fn test_render_function_detail_unknown() {
    let dump = parse_text(DUMP).unwrap();
    assert!(render_function_detail(&dump, "main.nothing()").is_none());
}
