use criterion::{Criterion, black_box, criterion_group, criterion_main};
use growbuf::{ByteString, View};

fn bench_string(c: &mut Criterion) {
    let s = "the quick brown fox jumps over the lazy dog";
    {
        let mut group = c.benchmark_group("String vs ByteString (Build)");
        group.bench_function("std::string::String", |b| {
            b.iter(|| {
                let mut st = String::new();
                st.push_str(black_box(s));
                st
            })
        });

        group.bench_function("ByteString", |b| {
            b.iter(|| {
                let mut st = ByteString::new();
                st.push_str(black_box(s));
                st
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("String vs ByteString (Push Bytes)");
        group.bench_function("std::string::String", |b| {
            b.iter(|| {
                let mut st = String::new();
                for _ in 0..64 {
                    st.push(black_box('x'));
                }
                st
            })
        });

        group.bench_function("ByteString", |b| {
            b.iter(|| {
                let mut st = ByteString::new();
                for _ in 0..64 {
                    st.push(black_box(b'x'));
                }
                st
            })
        });
        group.finish();
    }
}

fn bench_view_search(c: &mut Criterion) {
    let haystack = "abcabcabc".repeat(100);
    {
        let mut group = c.benchmark_group("str::find vs View::find");
        group.bench_function("str::find", |b| {
            b.iter(|| black_box(haystack.as_str()).find("cab"))
        });

        let view = View::new(&haystack);
        group.bench_function("View::find", |b| b.iter(|| black_box(view).find(b"cab")));
        group.finish();
    }

    {
        let mut group = c.benchmark_group("View count / trim");
        let view = View::new(&haystack);
        group.bench_function("count", |b| b.iter(|| black_box(view).count(b"abc")));

        let padded = format!("  \t{}\n  ", haystack);
        let padded_view = View::new(&padded);
        group.bench_function("trim", |b| b.iter(|| black_box(padded_view).trim()));
        group.finish();
    }
}

criterion_group!(benches, bench_string, bench_view_search);
criterion_main!(benches);
