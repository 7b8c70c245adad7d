use crate::core::library::LibraryResult;

pub trait Repository<Entity> {
    // create an entity
    fn create(&mut self, entity: &Entity) -> LibraryResult<usize>;

    // updates an entity
    fn update(&mut self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    fn get(&self, id: &str) -> LibraryResult<Entity>;

    // delete an entity
    fn delete(&mut self, id: &str) -> LibraryResult<usize>;

    // iterate all entities in insertion order
    fn iter(&self) -> Box<dyn Iterator<Item = &Entity> + '_>;

    fn len(&self) -> usize {
        self.iter().count()
    }
}
