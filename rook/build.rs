fn main() {
    let _shadow =
        shadow_rs::ShadowBuilder::builder().build().expect("generate build information");
}
