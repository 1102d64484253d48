use chatkit_layout::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const MESSAGE_COUNT_SAMPLES: &[usize] = &[64, 512];
const VIEWPORT_WIDTH: f32 = 390.0;

fn conversation(message_count: usize) -> Conversation {
    let me = Sender::new("me", "Me");
    let them = Sender::new("them", "Them");
    let messages = (0..message_count)
        .map(|index| {
            let sender = if index % 2 == 0 { me.clone() } else { them.clone() };
            match index % 4 {
                0 => Message::system(
                    index.to_string(),
                    sender,
                    StyledText::plain(format!("Status {index}")),
                ),
                1 => Message::new(index.to_string(), sender, MessageKind::Custom),
                _ => Message::attachment(
                    index.to_string(),
                    sender,
                    "caption ".repeat(index % 17),
                    MediaItem::new(ImageInfo::new(400.0 + index as f32, 300.0)),
                ),
            }
        })
        .collect();
    Conversation::with_messages(me, messages)
}

fn bench_uncached(c: &mut Criterion) {
    let mut group = c.benchmark_group("size_for_item_uncached");
    let calculators = CalculatorSet::default();
    for &count in MESSAGE_COUNT_SAMPLES {
        let conversation = conversation(count);
        let layout = MessagesLayout::new(&conversation, &MonospacedTextMeasurer)
            .with_viewport(ViewportGeometry::new(VIEWPORT_WIDTH));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                for index_path in layout.index_paths() {
                    let size = calculators.size_for_item(&layout, index_path).unwrap();
                    black_box(size);
                }
            });
        });
    }
    group.finish();
}

fn bench_cached(c: &mut Criterion) {
    let mut group = c.benchmark_group("size_cache_prepare");
    let calculators = CalculatorSet::default();
    for &count in MESSAGE_COUNT_SAMPLES {
        let conversation = conversation(count);
        let layout = MessagesLayout::new(&conversation, &MonospacedTextMeasurer)
            .with_viewport(ViewportGeometry::new(VIEWPORT_WIDTH));
        let mut cache = SizeCache::new();
        cache.prepare(&calculators, &layout).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| black_box(cache.prepare(&calculators, &layout).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_uncached, bench_cached);
criterion_main!(benches);
