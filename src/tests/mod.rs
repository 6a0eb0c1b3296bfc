mod quantifiers;
