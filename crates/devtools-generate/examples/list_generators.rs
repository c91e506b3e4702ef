use devtools_generate::{FakeRsAdapter, GeneratorContext, ValueType, create};

fn main() {
    let ctx = GeneratorContext {
        faker: &FakeRsAdapter,
    };
    let mut rng = rand::rng();
    for value_type in ValueType::ALL {
        let sample = create(value_type).generate(&ctx, &mut rng);
        println!("{value_type:<10} {sample}");
    }
}
