fn main() {
    dioxus::launch(todo_web::App);
}
