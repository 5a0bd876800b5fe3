mod helpers;

#[test]
fn fixtures_are_present_and_readable() {
    let movies = helpers::read_fixture("movies.txt");
    let unique = helpers::read_fixture("unique.txt");

    assert!(movies.starts_with(b"Toy Story\n"));
    assert!(unique.starts_with(b"Alien\n"));
    assert!(helpers::read_fixture("empty.txt").is_empty());
}
