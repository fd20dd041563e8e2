use forward_list::collections::ForwardList;

fn main() {
    let mut list = ForwardList::new();

    list.append("A");
    list.append("B");
    list.append("C");
    list.append("D");
    list.append("E");

    list.print();
}
