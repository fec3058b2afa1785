pub struct Schema {
    get: Tree,
}

pub struct Tree {
    children: Vec<Tree>,
}
