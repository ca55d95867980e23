mod symptoms;
