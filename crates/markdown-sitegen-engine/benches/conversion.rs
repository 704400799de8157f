use criterion::{Criterion, criterion_group, criterion_main};
use markdown_sitegen_engine::{markdown_to_html, markdown_to_html_node, tokenize};

fn generate_markdown_content(sections: usize) -> String {
    let mut content = String::from("# Benchmark document\n\n");
    for i in 0..sections {
        content.push_str(&format!(
            "## Section {i}\n\n\
             Some **bold** text, some *italic* text and `inline code` with a \
             [link](https://example.com/{i}) and ![an image](/img/{i}.png).\n\n\
             - first item with **emphasis**\n- second item\n\n\
             > quoted *wisdom* number {i}\n\n\
             ```\nfn section_{i}() {{}}\n```\n\n"
        ));
    }
    content
}

fn bench_tokenize(c: &mut Criterion) {
    let line = "This is **text** with an *italic* word and a `code block` and an \
                ![obi wan image](https://i.imgur.com/fJRm4Vk.jpeg) and a [link](https://boot.dev)";
    c.bench_function("tokenize_line", |b| {
        b.iter(|| tokenize(std::hint::black_box(line)).unwrap());
    });
}

fn bench_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("document");
    group.sample_size(10);

    let content = generate_markdown_content(100);
    group.bench_function("markdown_to_html_node", |b| {
        b.iter(|| markdown_to_html_node(std::hint::black_box(&content)).unwrap());
    });
    group.bench_function("markdown_to_html", |b| {
        b.iter(|| markdown_to_html(std::hint::black_box(&content)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_document);
criterion_main!(benches);
