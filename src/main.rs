fn main() {
    cvterm::mount();
}
